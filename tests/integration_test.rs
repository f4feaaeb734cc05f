//! 集成測試

use b2b_pricing::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn direct_air() -> Route {
    Route::direct(
        "Shenzhen → Port-au-Prince (air)".to_string(),
        ShippingSegment::new(SegmentKind::DirectOriginToDestination, dec!(5), dec!(3))
            .with_transit_days(7, 10),
    )
}

fn via_miami() -> Route {
    Route::via_hub(
        "Shenzhen → Miami → Port-au-Prince".to_string(),
        ShippingSegment::new(SegmentKind::OriginToHub, dec!(3.2), dec!(15))
            .with_transit_days(14, 20),
        ShippingSegment::new(SegmentKind::HubToDestination, dec!(1.1), dec!(4))
            .with_transit_days(2, 4),
    )
}

#[test]
fn test_golden_end_to_end() {
    // 場景：成本 100、1kg、無利潤區間（預設 40%）、直達路線、類目費 2 + 1%、無費用、平台費 0%
    let input = BreakdownInput::new(dec!(100), dec!(1))
        .with_profit_margin(dec!(40))
        .with_route(direct_air())
        .with_category_rate(CategoryRate::new("home".to_string(), dec!(2), dec!(1)))
        .with_platform_fee_percent(dec!(0));

    let b = quote(&input);

    assert!(b.applied_margin_range.is_none());
    assert_eq!(b.margin_value, dec!(40));
    assert_eq!(b.subtotal_with_margin, dec!(140));
    assert_eq!(b.logistics_cost, dec!(5));
    assert_eq!(b.logistics_segments.len(), 1);
    assert_eq!(b.logistics_segments[0].label, "Origin → Destination (direct)");
    assert_eq!(b.category_fixed_fee, dec!(2));
    assert_eq!(b.category_percentage_fee, dec!(1));
    assert_eq!(b.category_total_fee, dec!(3));
    assert_eq!(b.subtotal_before_fee, dec!(148));
    assert_eq!(b.platform_fee, dec!(0));
    assert_eq!(b.b2b_price.to_string(), "148.00");
    assert_eq!(b.pvp_margin_percent, dec!(35));
    assert_eq!(b.suggested_pvp.to_string(), "199.80");
    assert_eq!(b.profit_amount.to_string(), "51.80");
    assert_eq!((b.transit_days_min, b.transit_days_max), (7, 10));
}

#[test]
fn test_form_to_breakdown_with_hub_route() {
    let form = QuoteForm {
        factory_cost: "60".to_string(),
        weight_kg: "not a number".to_string(),
        profit_margin: String::new(),
        platform_fee_percent: "5".to_string(),
    };

    let input = form
        .to_input()
        .with_route(via_miami())
        .with_margin_ranges(vec![
            MarginRange::new(dec!(0), Some(dec!(50)), dec!(30)),
            MarginRange::new(dec!(50), None, dec!(20)),
        ])
        .with_expenses(vec![
            DynamicExpense::percent("Customs".to_string(), dec!(10)),
            DynamicExpense::fixed("Volume discount".to_string(), dec!(4)).subtract(),
        ]);

    let b = quote(&input);

    // 重量無法解析 → 1kg；成本 60 落在 [50,∞) → 20%
    assert_eq!(b.weight_kg, dec!(1));
    assert_eq!(b.margin_percent, dec!(20));
    assert_eq!(b.subtotal_with_margin, dec!(72));
    // 兩段都取最低收費：15 + 4
    assert_eq!(b.logistics_cost, dec!(19));
    // 72 + 19 = 91 → +9.1 → -4 = 96.1
    assert_eq!(b.expenses_cost, dec!(5.1));
    assert_eq!(b.subtotal_before_fee, dec!(96.1));
    // 96.1 × 5% = 4.805
    assert_eq!(b.platform_fee, dec!(4.805));
    assert_eq!(b.b2b_price.to_string(), "100.91");
    // 100.905 落在 [100,200) → 35%
    assert_eq!(b.pvp_margin_percent, dec!(35));
    assert_eq!(b.suggested_pvp.to_string(), "136.22");
    assert_eq!(b.profit_amount.to_string(), "35.32");
}

#[rstest]
#[case(dec!(19.99), dec!(10))]
#[case(dec!(20), dec!(5))]
fn test_margin_range_boundary(#[case] cost: Decimal, #[case] expected: Decimal) {
    let input = BreakdownInput::new(cost, dec!(1)).with_margin_ranges(vec![
        MarginRange::new(dec!(0), Some(dec!(20)), dec!(10)),
        MarginRange::new(dec!(20), None, dec!(5)),
    ]);

    assert_eq!(quote(&input).margin_percent, expected);
}

#[test]
fn test_pvp_boundary_at_twenty() {
    // 成本 20、利潤 0 → B2B 正好 20.00，應落在 45% 級距
    let input = BreakdownInput::new(dec!(20), dec!(1)).with_profit_margin(dec!(0));
    let b = quote(&input);

    assert_eq!(b.b2b_price.to_string(), "20.00");
    assert_eq!(b.pvp_margin_percent, dec!(45));
    assert_eq!(b.suggested_pvp.to_string(), "29.00");
}

#[test]
fn test_route_cost_helper() {
    let cost = route_cost(&via_miami(), dec!(10));

    // 32 + 11
    assert_eq!(cost.total_cost, dec!(43));
    assert_eq!(cost.total_days_min, 16);
    assert_eq!(cost.total_days_max, 24);
}

#[test]
fn test_breakdown_serializes_to_json() {
    let b = quote(&BreakdownInput::new(dec!(100), dec!(1)).with_route(direct_air()));
    let json = serde_json::to_value(&b).unwrap();

    assert_eq!(json["b2b_price"], "145.00");
    assert_eq!(json["logistics_segments"][0]["kind"], "direct_origin_to_destination");

    let back: PriceBreakdown = serde_json::from_value(json).unwrap();
    assert_eq!(back, b);
}

#[test]
fn test_config_from_json_drives_calculator() {
    let config = PricingConfig::from_json(
        r#"{
            "default_profit_margin": "10",
            "platform_fee_percent": "2",
            "pvp_brackets": [
                { "min_price": "0", "max_price": null, "margin_percent": "25" }
            ]
        }"#,
    )
    .unwrap();

    let calculator = PriceCalculator::new(config);
    let b = calculator.calculate(&BreakdownInput::new(dec!(100), dec!(1)));

    // 100 + 10 = 110 → ×2% = 2.2 → 112.2
    assert_eq!(b.b2b_price, dec!(112.20));
    assert_eq!(b.pvp_margin_percent, dec!(25));
    assert_eq!(b.suggested_pvp, dec!(140.25));
}

#[test]
fn test_batch_matches_single_quotes() {
    let calculator = PriceCalculator::default();
    let inputs: Vec<BreakdownInput> = [dec!(5), dec!(25), dec!(75), dec!(150), dec!(400)]
        .into_iter()
        .map(|cost| BreakdownInput::new(cost, dec!(2)).with_route(via_miami()))
        .collect();

    let batch = calculator.calculate_batch(&inputs);

    assert_eq!(batch.breakdowns.len(), inputs.len());
    for (input, breakdown) in inputs.iter().zip(&batch.breakdowns) {
        assert_eq!(breakdown, &calculator.calculate(input));
    }
    assert!(batch.warnings.is_empty());
}
