pub fn monthly_summary_key(month: u32, year: i32) -> String {
    format!("monthly_summary:{:04}-{:02}", year, month)
}
