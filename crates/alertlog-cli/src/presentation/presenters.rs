use crate::presentation::view_models::ReportViewModel;
use alertlog_types::SummaryRecord;

pub fn present_report(records: Vec<SummaryRecord>) -> ReportViewModel {
    ReportViewModel { entries: records }
}
