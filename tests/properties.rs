//! Property tests for the availability, pricing, and refund rules.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use dock_booking_engine::calculation::{
    compute_refund, compute_total, is_available, ranges_overlap,
};
use dock_booking_engine::models::{
    DateRange, OccupantClass, Reservation, ReservationStatus, SettlementStatus,
};

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn range_at(offset: u64, nights: u64) -> DateRange {
    let start = base_day() + Days::new(offset);
    DateRange::new(start, start + Days::new(nights)).unwrap()
}

fn reservation(range: DateRange, status: ReservationStatus) -> Reservation {
    Reservation {
        id: "res_prop".to_string(),
        slip_id: "slip_a1".to_string(),
        range,
        status,
        occupant_class: OccupantClass::Renter,
    }
}

fn occupant_class() -> impl Strategy<Value = OccupantClass> {
    prop_oneof![
        Just(OccupantClass::Renter),
        Just(OccupantClass::Homeowner),
        Just(OccupantClass::Admin),
        Just(OccupantClass::Superadmin),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn overlap_is_symmetric(
        a_offset in 0_u64..60, a_nights in 1_u64..20,
        b_offset in 0_u64..60, b_nights in 1_u64..20
    ) {
        let a = range_at(a_offset, a_nights);
        let b = range_at(b_offset, b_nights);
        prop_assert_eq!(ranges_overlap(&a, &b), ranges_overlap(&b, &a));
    }

    #[test]
    fn back_to_back_ranges_never_conflict(
        offset in 0_u64..60, first in 1_u64..20, second in 1_u64..20
    ) {
        let booked = range_at(offset, first);
        let next = range_at(offset + first, second);
        let existing = [reservation(booked, ReservationStatus::Confirmed)];
        prop_assert!(is_available(&next, &existing));
    }

    #[test]
    fn only_confirmed_reservations_block(
        offset in 0_u64..60, nights in 1_u64..20,
        cancelled in any::<bool>()
    ) {
        let range = range_at(offset, nights);
        let status = if cancelled { ReservationStatus::Cancelled } else { ReservationStatus::Pending };
        let existing = [reservation(range, status)];
        prop_assert!(is_available(&range, &existing));

        let confirmed = [reservation(range, ReservationStatus::Confirmed)];
        prop_assert!(!is_available(&range, &confirmed));
    }

    #[test]
    fn final_total_is_base_minus_discount(
        nights in 1_u64..90,
        rate_cents in 0_i64..100_000,
        class in occupant_class()
    ) {
        let rate = Decimal::new(rate_cents, 2);
        let result = compute_total(&range_at(0, nights), rate, class).unwrap();

        prop_assert_eq!(result.night_count, nights as i64);
        prop_assert_eq!(result.base_total, Decimal::from(nights) * rate);
        prop_assert_eq!(result.final_total, result.base_total - result.discount);
        prop_assert!(result.final_total <= result.base_total);
        // Exempt classes are priced as renters, so only the night count matters
        prop_assert_eq!(result.discount_applied, nights == 30);
        if !result.discount_applied {
            prop_assert_eq!(result.discount, Decimal::ZERO);
        }
    }

    #[test]
    fn renter_refund_and_fee_sum_to_total(
        days_before in -10_i64..30,
        cost_cents in 0_i64..1_000_000
    ) {
        let check_in = NaiveDate::from_ymd_opt(2025, 6, 22).unwrap();
        let cancelled_on = check_in - chrono::Duration::days(days_before);
        let total = Decimal::new(cost_cents, 2);

        let result = compute_refund(check_in, cancelled_on, total, OccupantClass::Renter).unwrap();

        prop_assert_eq!(result.refund_amount + result.cancellation_fee, total);
        prop_assert!(result.refund_amount >= Decimal::ZERO);
        prop_assert!(result.cancellation_fee >= Decimal::ZERO);
        prop_assert_ne!(result.settlement_status, SettlementStatus::Exempt);
        prop_assert_eq!(result.days_until_check_in, days_before);
    }

    #[test]
    fn earlier_cancellation_never_refunds_less(
        days_before in -5_i64..20,
        cost_cents in 0_i64..1_000_000
    ) {
        let check_in = NaiveDate::from_ymd_opt(2025, 6, 22).unwrap();
        let total = Decimal::new(cost_cents, 2);
        let later = compute_refund(
            check_in,
            check_in - chrono::Duration::days(days_before),
            total,
            OccupantClass::Renter,
        )
        .unwrap();
        let earlier = compute_refund(
            check_in,
            check_in - chrono::Duration::days(days_before + 1),
            total,
            OccupantClass::Renter,
        )
        .unwrap();

        prop_assert!(earlier.refund_amount >= later.refund_amount);
    }

    #[test]
    fn exempt_classes_always_settle_at_zero(
        days_before in -10_i64..30,
        cost_cents in 0_i64..1_000_000,
        class in prop_oneof![
            Just(OccupantClass::Homeowner),
            Just(OccupantClass::Admin),
            Just(OccupantClass::Superadmin),
        ]
    ) {
        let check_in = NaiveDate::from_ymd_opt(2025, 6, 22).unwrap();
        let result = compute_refund(
            check_in,
            check_in - chrono::Duration::days(days_before),
            Decimal::new(cost_cents, 2),
            class,
        )
        .unwrap();

        prop_assert_eq!(result.refund_amount, Decimal::ZERO);
        prop_assert_eq!(result.cancellation_fee, Decimal::ZERO);
        prop_assert_eq!(result.settlement_status, SettlementStatus::Exempt);
    }
}
