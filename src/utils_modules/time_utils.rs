use crate::common::*;

/* 오프셋 정보가 없는 타임스탬프 형식 (먼저 매칭되는 형식 사용) */
const NAIVE_DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/* 웨이보 API 의 created_at 형식 - ex) Mon Jan 01 12:00:00 +0800 2024 */
const WEIBO_API_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

#[doc = r#"
    게시글 작성 시각 문자열을 NaiveDateTime 으로 변환하는 함수.

    오프셋이 포함된 형식(RFC 3339, 웨이보 API 형식)은 해당 지역 시각(wall clock)을 유지한다.
    날짜만 있는 경우 00:00:00 으로 간주한다.

    # Returns
    * `Some(NaiveDateTime)` - 인식 가능한 형식일 때
    * `None` - 어느 형식에도 해당하지 않을 때
"#]
pub fn parse_post_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw: &str = raw.trim();

    if raw.is_empty() {
        return None;
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    if let Ok(dt) = DateTime::parse_from_str(raw, WEIBO_API_FORMAT) {
        return Some(dt.naive_local());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

#[doc = "시각 정보를 버리고 날짜 키만 남긴다"]
pub fn truncate_to_date(ts: &NaiveDateTime) -> NaiveDate {
    ts.date()
}

#[doc = "차트 축 라벨용 날짜 문자열"]
pub fn format_date_label(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[doc = "스프레드시트 날짜 셀을 테이블 셀 문자열로 직렬화"]
pub fn format_cell_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
