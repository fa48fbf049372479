use chrono::{
  DateTime,
  Datelike,
  NaiveDate,
  NaiveDateTime
};
use serde::Deserialize;

/// Locale used for due-date labels.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Deserialize,
)]
pub enum DateLocale {
  /// `1/31/2024`
  #[default]
  #[serde(rename = "en-US")]
  EnUs,
  /// `31/01/2024`
  #[serde(rename = "en-GB")]
  EnGb,
  /// `31.1.2024`
  #[serde(rename = "de-DE")]
  DeDe,
  /// `2024-01-31`
  #[serde(rename = "iso")]
  Iso
}

impl DateLocale {
  pub fn format(
    self,
    date: NaiveDate
  ) -> String {
    let (y, m, d) =
      (date.year(), date.month(), date.day());
    match self {
      | DateLocale::EnUs => {
        format!("{m}/{d}/{y}")
      }
      | DateLocale::EnGb => {
        format!("{d:02}/{m:02}/{y}")
      }
      | DateLocale::DeDe => {
        format!("{d}.{m}.{y}")
      }
      | DateLocale::Iso => {
        date.format("%Y-%m-%d").to_string()
      }
    }
  }
}

/// Accepts a plain calendar date, an
/// RFC 3339 timestamp or a naive
/// `YYYY-MM-DDTHH:MM[:SS]` value. Only
/// the calendar date is kept.
pub fn parse_due_date(
  raw: &str
) -> Option<NaiveDate> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }

  if let Ok(date) =
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
  {
    return Some(date);
  }

  if let Ok(dt) =
    DateTime::parse_from_rfc3339(raw)
  {
    return Some(dt.date_naive());
  }

  ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
    .iter()
    .find_map(|fmt| {
      NaiveDateTime::parse_from_str(
        raw, fmt
      )
      .ok()
    })
    .map(|dt| dt.date())
}

/// Renders the date part of a due label.
/// Values that do not parse are shown
/// as received.
pub fn format_due_date(
  raw: &str,
  locale: DateLocale
) -> String {
  match parse_due_date(raw) {
    | Some(date) => locale.format(date),
    | None => {
      tracing::warn!(raw, "unparseable due date; showing raw value");
      raw.trim().to_string()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn us_locale_drops_leading_zeros() {
    assert_eq!(
      format_due_date(
        "2024-01-01",
        DateLocale::EnUs
      ),
      "1/1/2024"
    );
    assert_eq!(
      format_due_date(
        "2024-11-23",
        DateLocale::EnUs
      ),
      "11/23/2024"
    );
  }

  #[test]
  fn timestamps_keep_their_calendar_date()
  {
    assert_eq!(
      parse_due_date(
        "2024-03-05T23:30:00+02:00"
      ),
      NaiveDate::from_ymd_opt(2024, 3, 5)
    );
    assert_eq!(
      parse_due_date("2024-03-05T08:15"),
      NaiveDate::from_ymd_opt(2024, 3, 5)
    );
  }

  #[test]
  fn other_locales() {
    let date =
      NaiveDate::from_ymd_opt(2024, 1, 9)
        .expect("valid date");
    assert_eq!(
      DateLocale::EnGb.format(date),
      "09/01/2024"
    );
    assert_eq!(
      DateLocale::DeDe.format(date),
      "9.1.2024"
    );
    assert_eq!(
      DateLocale::Iso.format(date),
      "2024-01-09"
    );
  }

  #[test]
  fn garbage_is_shown_verbatim() {
    assert_eq!(parse_due_date("soon"), None);
    assert_eq!(
      format_due_date(
        " soon ",
        DateLocale::EnUs
      ),
      "soon"
    );
  }
}
