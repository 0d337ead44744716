use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::calendar::day_of;
use super::model::{
    AnalyticsSnapshot, DailyCo2Point, ImpactCount, LifetimeTotals, TrendPoint, WeeklySummary,
};
use crate::impact::ImpactTier;
use crate::scan::ScanRecord;

pub const WEEK_DAYS: u32 = 7;
pub const TREND_DAYS: u32 = 30;

pub fn recompute(snapshot: &[ScanRecord], now: DateTime<Utc>) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        weekly_series: daily_co2_series(snapshot, now, WEEK_DAYS),
        impact_counts: impact_counts(snapshot),
        summary: weekly_summary(snapshot, now),
    }
}

/// Per-day `(co2, scans)` buckets for the `days` days ending at `now`,
/// zero-initialized so every day of the window is present.
fn day_buckets(
    snapshot: &[ScanRecord],
    now: DateTime<Utc>,
    days: u32,
) -> BTreeMap<NaiveDate, (f64, usize)> {
    let today = day_of(now);
    let mut buckets: BTreeMap<NaiveDate, (f64, usize)> = (0..i64::from(days))
        .map(|offset| (today - Duration::days(offset), (0.0, 0)))
        .collect();

    for record in snapshot {
        if let Some((co2, scans)) = buckets.get_mut(&day_of(record.timestamp())) {
            *co2 += record.co2_estimate();
            *scans += 1;
        }
    }

    buckets
}

/// CO2 per day, ascending by date, one point per day of the window.
pub fn daily_co2_series(
    snapshot: &[ScanRecord],
    now: DateTime<Utc>,
    days: u32,
) -> Vec<DailyCo2Point> {
    day_buckets(snapshot, now, days)
        .into_iter()
        .map(|(date, (co2, _))| DailyCo2Point {
            date,
            label: date.format("%a").to_string(),
            co2,
        })
        .collect()
}

/// CO2 and scan volume per day, ascending by date.
pub fn trend_line(snapshot: &[ScanRecord], now: DateTime<Utc>, days: u32) -> Vec<TrendPoint> {
    day_buckets(snapshot, now, days)
        .into_iter()
        .map(|(date, (co2, scans))| TrendPoint { date, co2, scans })
        .collect()
}

/// Scan count per tier, most frequent first; equal counts keep severity
/// order. Tiers with no scans are omitted, not zero-filled.
pub fn impact_counts(snapshot: &[ScanRecord]) -> Vec<ImpactCount> {
    let mut counts: BTreeMap<ImpactTier, usize> = BTreeMap::new();
    for record in snapshot {
        *counts.entry(record.impact_tier()).or_default() += 1;
    }

    let mut counts: Vec<ImpactCount> = counts
        .into_iter()
        .map(|(tier, count)| ImpactCount { tier, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

fn last_week<'a>(
    snapshot: &'a [ScanRecord],
    now: DateTime<Utc>,
) -> impl Iterator<Item = &'a ScanRecord> {
    let since = now - Duration::days(i64::from(WEEK_DAYS));
    snapshot
        .iter()
        .filter(move |record| record.timestamp() >= since)
}

pub fn weekly_summary(snapshot: &[ScanRecord], now: DateTime<Utc>) -> WeeklySummary {
    let (total_scans, total_co2) = last_week(snapshot, now)
        .fold((0, 0.0), |(scans, co2), record| {
            (scans + 1, co2 + record.co2_estimate())
        });

    WeeklySummary {
        total_scans,
        total_co2,
        streak_days: streak_days(snapshot, day_of(now)),
    }
}

/// Consecutive days with at least one scan, walking back from `today`.
pub fn streak_days(snapshot: &[ScanRecord], today: NaiveDate) -> u32 {
    let scanned_days: HashSet<NaiveDate> = snapshot
        .iter()
        .map(|record| day_of(record.timestamp()))
        .collect();

    let mut streak = 0;
    let mut cursor = Some(today);
    while let Some(day) = cursor.filter(|day| scanned_days.contains(day)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

/// Points earned over the last week; lower-impact scans earn more.
pub fn environmental_score(snapshot: &[ScanRecord], now: DateTime<Utc>) -> u32 {
    last_week(snapshot, now)
        .map(|record| record.impact_tier().points())
        .sum()
}

pub fn lifetime_totals(snapshot: &[ScanRecord]) -> LifetimeTotals {
    LifetimeTotals {
        total_scans: snapshot.len(),
        total_co2: snapshot.iter().map(ScanRecord::co2_estimate).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisposalType, Locality, ScanDraft, ScanId};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        // Friday
        Utc.with_ymd_and_hms(2026, 10, 16, 15, 30, 0).unwrap()
    }

    fn record(id: &str, tier: ImpactTier, at: DateTime<Utc>) -> ScanRecord {
        ScanRecord::new(
            ScanId::from(id),
            ScanDraft {
                barcode: format!("barcode-{id}"),
                product_name: format!("Product {id}"),
                category: "snacks".into(),
                locality: Locality::SanFrancisco,
                impact_tier: tier,
                disposal_type: DisposalType::Recycle,
            },
            at,
        )
    }

    fn days_ago(days: i64) -> DateTime<Utc> {
        now() - Duration::days(days)
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn weekly_series_has_seven_zero_buckets_when_empty() {
        let series = daily_co2_series(&[], now(), WEEK_DAYS);

        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|point| point.co2 == 0.0));
        assert_eq!(series.first().unwrap().date, NaiveDate::from_ymd_opt(2026, 10, 10).unwrap());
        assert_eq!(series.last().unwrap().date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(series.first().unwrap().label, "Sat");
        assert_eq!(series.last().unwrap().label, "Fri");
    }

    #[test]
    fn weekly_series_buckets_by_day_and_ignores_older_records() {
        let snapshot = vec![
            record("today-1", ImpactTier::Red, now()),
            record(
                "today-2",
                ImpactTier::Green,
                Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap(),
            ),
            record("two-days", ImpactTier::Yellow, days_ago(2)),
            record("seven-days", ImpactTier::Red, days_ago(7)),
        ];

        let series = daily_co2_series(&snapshot, now(), WEEK_DAYS);

        assert_eq!(series.len(), 7);
        assert!(approx_eq(series[6].co2, 5.8));
        assert!(approx_eq(series[4].co2, 2.5));
        let total: f64 = series.iter().map(|p| p.co2).sum();
        assert!(approx_eq(total, 8.3));
    }

    #[test]
    fn impact_counts_omit_absent_tiers() {
        let snapshot = vec![
            record("a", ImpactTier::Red, now()),
            record("b", ImpactTier::Red, days_ago(40)),
            record("c", ImpactTier::Green, days_ago(1)),
        ];

        let counts = impact_counts(&snapshot);
        assert_eq!(
            counts,
            vec![
                ImpactCount { tier: ImpactTier::Red, count: 2 },
                ImpactCount { tier: ImpactTier::Green, count: 1 },
            ]
        );
        assert!(impact_counts(&[]).is_empty());
    }

    #[test]
    fn impact_counts_tie_keeps_severity_order() {
        let snapshot = vec![
            record("a", ImpactTier::Red, now()),
            record("b", ImpactTier::Yellow, now()),
            record("c", ImpactTier::Yellow, days_ago(2)),
            record("d", ImpactTier::Green, days_ago(3)),
        ];

        let tiers: Vec<ImpactTier> = impact_counts(&snapshot).iter().map(|c| c.tier).collect();
        assert_eq!(tiers, vec![ImpactTier::Yellow, ImpactTier::Green, ImpactTier::Red]);
    }

    #[test]
    fn weekly_summary_counts_last_seven_days() {
        let snapshot = vec![
            record("a", ImpactTier::Red, now()),
            record("b", ImpactTier::Yellow, days_ago(3)),
            record("edge", ImpactTier::Green, days_ago(7)),
            record("old", ImpactTier::Red, days_ago(7) - Duration::seconds(1)),
        ];

        let summary = weekly_summary(&snapshot, now());
        assert_eq!(summary.total_scans, 3);
        assert!(approx_eq(summary.total_co2, 8.3));
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let snapshot = vec![
            record("today", ImpactTier::Green, now()),
            record("yesterday", ImpactTier::Green, days_ago(1)),
            record("three-days", ImpactTier::Green, days_ago(3)),
        ];

        assert_eq!(streak_days(&snapshot, day_of(now())), 2);
        assert_eq!(weekly_summary(&snapshot, now()).streak_days, 2);
    }

    #[test]
    fn streak_is_zero_without_a_scan_today() {
        let snapshot = vec![
            record("yesterday", ImpactTier::Green, days_ago(1)),
            record("two-days", ImpactTier::Green, days_ago(2)),
        ];
        assert_eq!(streak_days(&snapshot, day_of(now())), 0);
    }

    #[test]
    fn streak_counts_calendar_days_not_24h_windows() {
        let snapshot = vec![
            record("late", ImpactTier::Green, Utc.with_ymd_and_hms(2026, 10, 16, 0, 5, 0).unwrap()),
            record("night", ImpactTier::Green, Utc.with_ymd_and_hms(2026, 10, 15, 23, 55, 0).unwrap()),
            record("dup", ImpactTier::Red, Utc.with_ymd_and_hms(2026, 10, 15, 8, 0, 0).unwrap()),
        ];
        assert_eq!(streak_days(&snapshot, day_of(now())), 2);
    }

    #[test]
    fn environmental_score_sums_tier_points_for_last_week() {
        let snapshot = vec![
            record("g", ImpactTier::Green, now()),
            record("y", ImpactTier::Yellow, days_ago(1)),
            record("r", ImpactTier::Red, days_ago(2)),
            record("old", ImpactTier::Green, days_ago(9)),
        ];
        assert_eq!(environmental_score(&snapshot, now()), 6);
    }

    #[test]
    fn trend_line_covers_window_with_scan_counts() {
        let snapshot = vec![
            record("a", ImpactTier::Green, now()),
            record("b", ImpactTier::Green, now() - Duration::hours(1)),
            record("c", ImpactTier::Red, days_ago(29)),
            record("d", ImpactTier::Red, days_ago(30)),
        ];

        let trend = trend_line(&snapshot, now(), TREND_DAYS);
        assert_eq!(trend.len(), 30);
        assert_eq!(trend[0].scans, 1);
        assert_eq!(trend[29].scans, 2);
        assert!(approx_eq(trend[29].co2, 1.6));
        assert_eq!(trend.iter().map(|p| p.scans).sum::<usize>(), 3);
    }

    #[test]
    fn recompute_bundles_all_views() {
        let snapshot = vec![record("a", ImpactTier::Yellow, now())];
        let view = recompute(&snapshot, now());

        assert_eq!(view.weekly_series.len(), 7);
        assert_eq!(view.impact_counts.len(), 1);
        assert_eq!(view.summary.total_scans, 1);
        assert_eq!(view.summary.streak_days, 1);
    }

    #[test]
    fn lifetime_totals_cover_whole_snapshot() {
        let snapshot = vec![
            record("a", ImpactTier::Yellow, now()),
            record("b", ImpactTier::Red, days_ago(100)),
        ];
        let totals = lifetime_totals(&snapshot);
        assert_eq!(totals.total_scans, 2);
        assert!(approx_eq(totals.total_co2, 7.5));
    }
}
