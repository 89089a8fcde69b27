use chrono::NaiveDate;

/// Parses a feed date in `YYYYMMDD` form.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    if date.len() != 8 {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y%m%d").ok()
}

#[test]
fn parse_date_test() {
    assert_eq!(
        parse_date("20190720"),
        NaiveDate::from_ymd_opt(2019, 7, 20)
    );
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("2019-07-20"), None);
    assert_eq!(parse_date("20190230"), None);
}
