use chrono::{DateTime, FixedOffset, Utc};
use civiltime::{
    intersect_ranges, AbsoluteTimeBridge, CalendarUnit, CivilInstant, DateComponent, FixedClock,
    LocalDate, LocalDateRange, LocalDateTime, LocalDateTimeRange, ParseError,
};
use qtty::Days;

fn clock(rfc3339: &str) -> FixedClock {
    FixedClock(DateTime::parse_from_rfc3339(rfc3339).unwrap())
}

#[test]
fn ordering_examples_hold() {
    assert!(LocalDateTime::new(2022, 5, 7, 23, 59, 59) < LocalDateTime::new(2022, 5, 8, 0, 0, 0));
    assert!(LocalDateTime::new(2022, 2, 1, 0, 0, 0) > LocalDateTime::new(2021, 12, 12, 0, 0, 0));
    assert!(LocalDateTime::new(2021, 2, 1, 0, 0, 0) < LocalDateTime::new(2021, 12, 12, 0, 0, 0));
}

#[test]
fn same_day_and_projections() {
    let late = LocalDateTime::new(2022, 5, 7, 23, 59, 59);
    assert!(late.is_same_day(&LocalDateTime::new(2022, 5, 7, 0, 0, 0)));
    assert_eq!(late.midnight().to_iso(), "2022-05-07T00:00:00");
    assert_eq!(late.end_of_day().to_iso(), "2022-05-07T23:59:59");
    assert_eq!(late.date().start_of_year().to_iso(), "2022-01-01");
    assert_eq!(late.date().end_of_year().to_iso(), "2022-12-31");
}

#[test]
fn shared_capability_is_generic() {
    fn key<T: CivilInstant>(value: &T) -> (i32, u32, u32, i64) {
        (value.year(), value.month(), value.day(), value.linear_timestamp())
    }
    let date = LocalDate::new(2022, 5, 7);
    let (y, m, d, k) = key(&date);
    assert_eq!((y, m, d), (2022, 5, 7));
    assert_eq!(k, 7 + 31 * (5 + 12 * 2022));
    let (_, _, _, k) = key(&date.midnight());
    assert_eq!(k, 86_400 * (7 + 31 * (5 + 12 * 2022)));
}

#[test]
fn range_intersection_cases() {
    let d = LocalDate::new;
    let january = LocalDateRange::new(d(2022, 1, 1), d(2022, 1, 31));
    let spanning = LocalDateRange::new(d(2022, 1, 15), d(2022, 2, 15));
    assert_eq!(
        january.intersect_with(&spanning),
        Some(LocalDateRange::new(d(2022, 1, 15), d(2022, 1, 31)))
    );

    let february = LocalDateRange::new(d(2022, 1, 31), d(2022, 2, 28));
    assert_eq!(
        january.intersect_with(&february),
        Some(LocalDateRange::new(d(2022, 1, 31), d(2022, 1, 31)))
    );

    let march = LocalDateRange::new(d(2022, 3, 1), d(2022, 3, 31));
    assert_eq!(january.intersect_with(&march), None);

    let inverted = LocalDateRange::new(d(2022, 1, 31), d(2022, 1, 1));
    assert_eq!(inverted.intersect_with(&january), None);
    assert_eq!(january.intersect_with(&inverted), None);
}

#[test]
fn range_lists_intersect() {
    let t = |h| LocalDateTime::new(2022, 5, 7, h, 0, 0);
    let open_hours = vec![
        LocalDateTimeRange::new(t(9), t(12)),
        LocalDateTimeRange::new(t(13), t(17)),
    ];
    let meeting = vec![LocalDateTimeRange::new(t(11), t(14))];
    let busy = intersect_ranges(&open_hours, &meeting);
    assert_eq!(
        busy,
        vec![
            LocalDateTimeRange::new(t(11), t(12)),
            LocalDateTimeRange::new(t(13), t(14)),
        ]
    );
}

#[test]
fn malformed_text_is_an_error_not_a_panic() {
    assert!(matches!(
        "2022-05".parse::<LocalDate>(),
        Err(ParseError::TokenCount {
            expected: 3,
            found: 2
        })
    ));
    assert!(matches!(
        "ab-01-01".parse::<LocalDate>(),
        Err(ParseError::InvalidNumber { index: 0, .. })
    ));
    assert!("2022-05-07 10:00:00".parse::<LocalDateTime>().is_err());
}

#[test]
fn bridge_in_a_fixed_zone() {
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let bridge = AbsoluteTimeBridge::new(tokyo).with_clock(clock("2030-01-01T00:00:00Z"));

    let instant: DateTime<Utc> = "2022-05-07T20:00:00Z".parse().unwrap();
    let local = LocalDateTime::from_absolute(instant, &bridge);
    assert_eq!(local, LocalDateTime::new(2022, 5, 8, 5, 0, 0));
    assert_eq!(local.to_absolute(&bridge).unwrap(), instant);

    assert!(local.is_weekend(&bridge).unwrap());
    assert_eq!(local.date_component(DateComponent::Weekday, &bridge).unwrap(), 7);
    assert_eq!(
        local.add_calendar_unit(CalendarUnit::Month, 1, &bridge).unwrap(),
        LocalDateTime::new(2022, 6, 8, 5, 0, 0)
    );
}

#[test]
fn today_with_custom_time() {
    let c = clock("2022-05-07T16:45:00+02:00");
    assert_eq!(LocalDate::today(&c), LocalDate::new(2022, 5, 7));
    assert_eq!(
        LocalDateTime::today_at(&c, 8, 30, 0),
        LocalDateTime::new(2022, 5, 7, 8, 30, 0)
    );
}

#[test]
fn range_duration_uses_real_month_lengths() {
    let bridge = AbsoluteTimeBridge::utc().with_clock(clock("2030-01-01T12:00:00Z"));
    // The ordering key treats every month as 31 days; the bridge does not.
    let feb = LocalDateRange::new(LocalDate::new(2023, 2, 1), LocalDate::new(2023, 3, 1));
    assert_eq!(feb.duration_days(&bridge).unwrap(), Days::new(28.0));
    assert_eq!(feb.to.linear_timestamp() - feb.from.linear_timestamp(), 31);
}

#[cfg(feature = "serde")]
#[test]
fn serde_values_are_single_strings() {
    let range = LocalDateTimeRange::new(
        LocalDateTime::new(2022, 5, 7, 8, 0, 0),
        LocalDateTime::new(2022, 5, 7, 17, 30, 0),
    );
    let json = serde_json::to_string(&range).unwrap();
    assert_eq!(json, r#"{"from":"2022-05-07T08:00:00","to":"2022-05-07T17:30:00"}"#);
    let back: LocalDateTimeRange = serde_json::from_str(&json).unwrap();
    assert_eq!(back, range);
}
