//! 報價計算示例
//!
//! 用法: cargo run --example quote -- [config.json]

use anyhow::Context;
use b2b_pricing::{
    BreakdownInput, CategoryRate, DynamicExpense, MarginRange, PriceCalculator, PricingConfig,
    QuoteForm, Route, SegmentKind, ShippingSegment,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("無法讀取配置檔 {}", path))?;
            PricingConfig::from_json(&json).with_context(|| format!("配置檔 {} 無效", path))?
        }
        None => PricingConfig::default().with_platform_fee_percent(Decimal::from(3)),
    };

    println!("=== B2B 報價示例 ===\n");

    // 表單輸入（寬鬆解析）
    let form = QuoteForm {
        factory_cost: "87.50".to_string(),
        weight_kg: "2.3".to_string(),
        profit_margin: String::new(),
        platform_fee_percent: String::new(),
    };

    let route = Route::via_hub(
        "Shenzhen → Miami → Port-au-Prince".to_string(),
        ShippingSegment::new(SegmentKind::OriginToHub, Decimal::new(450, 2), Decimal::from(20))
            .with_transit_days(12, 18),
        ShippingSegment::new(SegmentKind::HubToDestination, Decimal::new(175, 2), Decimal::from(5))
            .with_transit_days(3, 5),
    );

    let input: BreakdownInput = form
        .to_input()
        .with_route(route)
        .with_category_rate(CategoryRate::new(
            "electronics".to_string(),
            Decimal::from(2),
            Decimal::from(3),
        ))
        .with_margin_ranges(vec![
            MarginRange::new(Decimal::ZERO, Some(Decimal::from(20)), Decimal::from(35)),
            MarginRange::new(Decimal::from(20), Some(Decimal::from(100)), Decimal::from(25)),
            MarginRange::new(Decimal::from(100), None, Decimal::from(15)),
        ])
        .with_expenses(vec![
            DynamicExpense::percent("Insurance".to_string(), Decimal::new(15, 1)),
            DynamicExpense::fixed("Handling".to_string(), Decimal::from(3)),
        ]);

    let calculator = PriceCalculator::new(config);

    for warning in calculator.inspect(&input) {
        println!("  ! [{:?}] {}: {}", warning.severity, warning.subject, warning.message);
    }

    let breakdown = calculator.calculate_and_notify(&input, |b| {
        tracing::info!("報價已更新：B2B {}", b.b2b_price);
    });

    println!("出廠成本: {}", breakdown.factory_cost);
    println!(
        "利潤 ({}%): {} → 小計 {}",
        breakdown.margin_percent, breakdown.margin_value, breakdown.subtotal_with_margin
    );
    for segment in &breakdown.logistics_segments {
        println!("  - {}: {}", segment.label, segment.cost);
    }
    println!("物流: {}", breakdown.logistics_cost);
    println!("類目費: {}", breakdown.category_total_fee);
    for line in &breakdown.expense_lines {
        println!("  - {}: {}", line.name, line.amount);
    }
    println!(
        "平台服務費 ({}%): {}",
        breakdown.platform_fee_percent, breakdown.platform_fee
    );
    println!("B2B 價格: {}", breakdown.b2b_price);
    println!(
        "建議零售價 (+{}%): {} (利潤 {})",
        breakdown.pvp_margin_percent, breakdown.suggested_pvp, breakdown.profit_amount
    );

    let ship_date = NaiveDate::from_ymd_opt(2025, 11, 3).context("無效的出貨日期")?;
    let route_cost = b2b_pricing::route_cost(
        input.route.as_ref().context("缺少路線")?,
        breakdown.weight_kg,
    );
    let (earliest, latest) = route_cost.delivery_window(ship_date);
    println!("預計到貨: {} ~ {}", earliest, latest);

    println!("\n{}", serde_json::to_string_pretty(&breakdown)?);

    Ok(())
}
