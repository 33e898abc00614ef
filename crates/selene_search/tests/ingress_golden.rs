//! Golden-value and structural integration tests for sign-ingress search.

use selene_ephem::{Body, Ephemeris};
use selene_meeus::MeeusEphemeris;
use selene_search::{
    IngressSearchConfig, SearchError, find_next_ingress, find_prev_ingress, search_ingresses,
};
use selene_time::{Instant, UtcTime};
use selene_zodiac::{ZodiacSign, sign_from_longitude};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Instant {
    Instant::from_utc(&UtcTime::new(year, month, day, hour, minute, 0.0))
}

fn sign_at(oracle: &MeeusEphemeris, body: Body, t: Instant) -> ZodiacSign {
    let pos = oracle.position(body, t).unwrap();
    sign_from_longitude(pos.longitude_deg).sign
}

/// The Sun enters Aries at the March equinox: 2024-Mar-20 03:06 UTC.
#[test]
fn sun_enters_aries_at_equinox() {
    let oracle = MeeusEphemeris::new();
    let config = IngressSearchConfig { horizon_days: 40.0, ..Default::default() };
    let event = find_next_ingress(&oracle, Body::Sun, at(2024, 3, 1, 0, 0), &config)
        .expect("should find equinox ingress");
    assert_eq!(event.from_sign, ZodiacSign::Pisces);
    assert_eq!(event.to_sign, ZodiacSign::Aries);
    let diff = event.time.minutes_until(at(2024, 3, 20, 3, 6)).abs() / 60.0;
    assert!(diff < 2.0, "off by {diff:.2} h, got {}", event.time.to_utc());
}

/// Default 3-day horizon cannot reach a Sun ingress 19 days out.
#[test]
fn sun_ingress_exceeds_default_horizon() {
    let oracle = MeeusEphemeris::new();
    let err = find_next_ingress(
        &oracle,
        Body::Sun,
        at(2024, 3, 1, 0, 0),
        &IngressSearchConfig::default(),
    )
    .unwrap_err();
    match err {
        SearchError::HorizonExceeded { horizon_days, .. } => {
            assert_eq!(horizon_days, 3.0);
        }
        other => panic!("expected HorizonExceeded, got {other:?}"),
    }
}

/// The reported time is the entry side of the boundary: the Moon is
/// already in the destination sign at event.time and still in the
/// origin sign a few minutes earlier.
#[test]
fn moon_ingress_time_is_entry_side() {
    let oracle = MeeusEphemeris::new();
    let event = find_next_ingress(
        &oracle,
        Body::Moon,
        at(2024, 6, 1, 0, 0),
        &IngressSearchConfig::default(),
    )
    .expect("moon ingress within 3 days");
    assert_eq!(sign_at(&oracle, Body::Moon, event.time), event.to_sign);
    assert_eq!(sign_at(&oracle, Body::Moon, event.time.add_minutes(-5.0)), event.from_sign);
    assert_eq!(event.to_sign, event.from_sign.next());
}

/// Searching backward from just after an ingress converges on the same
/// boundary crossing.
#[test]
fn prev_ingress_agrees_with_next() {
    let oracle = MeeusEphemeris::new();
    let config = IngressSearchConfig::default();
    let next = find_next_ingress(&oracle, Body::Moon, at(2024, 6, 1, 0, 0), &config)
        .expect("forward ingress");
    let prev = find_prev_ingress(&oracle, Body::Moon, next.time.add_minutes(60.0), &config)
        .expect("backward ingress");
    assert_eq!(prev.to_sign, next.to_sign);
    assert_eq!(prev.from_sign, next.from_sign);
    let diff_min = prev.time.minutes_until(next.time).abs();
    assert!(diff_min < 5.0, "boundary times disagree by {diff_min:.2} min");
}

/// A 30-day scan yields one ingress per sign stint, chained in zodiac
/// order, touching every sign at least once.
#[test]
fn moon_scan_over_thirty_days() {
    let oracle = MeeusEphemeris::new();
    let events = search_ingresses(
        &oracle,
        Body::Moon,
        at(2024, 6, 1, 0, 0),
        at(2024, 7, 1, 0, 0),
        &IngressSearchConfig::default(),
    )
    .unwrap();

    assert!(
        (11..=14).contains(&events.len()),
        "expected 11-14 ingresses, got {}",
        events.len()
    );
    for pair in events.windows(2) {
        assert!(pair[0].time < pair[1].time, "events not in order");
        assert_eq!(pair[0].to_sign, pair[1].from_sign, "chain broken");
    }

    let mut seen = [false; 12];
    for event in &events {
        seen[event.to_sign.index() as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "not every sign entered: {seen:?}");
}

/// Each event reports the destination cusp degree, and the sampled
/// position at event time sits within a sliver past that cusp.
#[test]
fn ingress_longitude_on_cusp() {
    let oracle = MeeusEphemeris::new();
    let events = search_ingresses(
        &oracle,
        Body::Moon,
        at(2024, 2, 1, 0, 0),
        at(2024, 2, 15, 0, 0),
        &IngressSearchConfig::default(),
    )
    .unwrap();
    assert!(!events.is_empty());
    for event in &events {
        assert_eq!(event.longitude_deg, event.to_sign.start_deg());
        let pos = oracle.position(Body::Moon, event.time).unwrap();
        let past_cusp = selene_zodiac::signed_offset(event.longitude_deg, pos.longitude_deg);
        assert!(
            (0.0..0.05).contains(&past_cusp),
            "position {} not just past cusp of {:?}",
            pos.longitude_deg,
            event.to_sign
        );
    }
}

/// Meeus worked example 47.a: Moon near 133.17 Leo on 1992-Apr-12 0h.
#[test]
fn moon_longitude_against_worked_example() {
    let oracle = MeeusEphemeris::new();
    let pos = oracle.position(Body::Moon, at(1992, 4, 12, 0, 0)).unwrap();
    assert!(
        (pos.longitude_deg - 133.17).abs() < 0.1,
        "longitude = {}",
        pos.longitude_deg
    );
    assert_eq!(sign_from_longitude(pos.longitude_deg).sign, ZodiacSign::Leo);
}
