//! 運輸段模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PricingError;

/// 運輸段類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// 起運地 → 轉運中心
    OriginToHub,
    /// 轉運中心 → 目的地
    HubToDestination,
    /// 起運地直達目的地
    DirectOriginToDestination,
}

impl SegmentKind {
    /// 顯示用標籤
    pub fn label(self) -> &'static str {
        match self {
            SegmentKind::OriginToHub => "Origin → Hub",
            SegmentKind::HubToDestination => "Hub → Destination",
            SegmentKind::DirectOriginToDestination => "Origin → Destination (direct)",
        }
    }

    /// 資料層使用的識別字串
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::OriginToHub => "origin_to_hub",
            SegmentKind::HubToDestination => "hub_to_destination",
            SegmentKind::DirectOriginToDestination => "direct_origin_to_destination",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "origin_to_hub" => Ok(SegmentKind::OriginToHub),
            "hub_to_destination" => Ok(SegmentKind::HubToDestination),
            "direct_origin_to_destination" => Ok(SegmentKind::DirectOriginToDestination),
            other => Err(PricingError::UnknownSegmentKind(other.to_string())),
        }
    }
}

/// 運輸段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingSegment {
    /// 段類型
    pub kind: SegmentKind,

    /// 每公斤運費
    pub cost_per_kg: Decimal,

    /// 最低收費
    pub min_cost: Decimal,

    /// 預估最短天數
    pub estimated_days_min: u32,

    /// 預估最長天數
    pub estimated_days_max: u32,

    /// 是否啟用（未啟用的段不計入總額）
    pub is_active: bool,
}

impl ShippingSegment {
    /// 創建新的運輸段
    pub fn new(kind: SegmentKind, cost_per_kg: Decimal, min_cost: Decimal) -> Self {
        Self {
            kind,
            cost_per_kg,
            min_cost,
            estimated_days_min: 0,
            estimated_days_max: 0,
            is_active: true,
        }
    }

    /// 建構器模式：設置預估天數
    pub fn with_transit_days(mut self, days_min: u32, days_max: u32) -> Self {
        self.estimated_days_min = days_min;
        self.estimated_days_max = days_max;
        self
    }

    /// 建構器模式：設置為停用
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// 計算此段運費：max(每公斤運費 × 重量, 最低收費)
    pub fn cost_for(&self, weight_kg: Decimal) -> Decimal {
        self.cost_per_kg.saturating_mul(weight_kg).max(self.min_cost)
    }

    /// 檢查天數區間是否合理
    pub fn has_valid_transit_days(&self) -> bool {
        self.estimated_days_min <= self.estimated_days_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cost_uses_rate_above_minimum() {
        let segment = ShippingSegment::new(SegmentKind::OriginToHub, dec!(5), dec!(3));
        assert_eq!(segment.cost_for(dec!(2)), dec!(10));
    }

    #[test]
    fn test_cost_falls_back_to_minimum() {
        let segment = ShippingSegment::new(SegmentKind::HubToDestination, dec!(2.5), dec!(15));
        assert_eq!(segment.cost_for(dec!(4)), dec!(15));
    }

    #[test]
    fn test_cost_saturates_on_huge_weight() {
        let segment = ShippingSegment::new(SegmentKind::OriginToHub, dec!(1000), dec!(3));
        assert_eq!(segment.cost_for(Decimal::MAX), Decimal::MAX);
    }

    #[test]
    fn test_kind_labels_and_parsing() {
        assert_eq!(SegmentKind::OriginToHub.label(), "Origin → Hub");
        assert_eq!(
            "direct_origin_to_destination".parse::<SegmentKind>().unwrap(),
            SegmentKind::DirectOriginToDestination
        );
        assert!(matches!(
            "sea_freight".parse::<SegmentKind>(),
            Err(PricingError::UnknownSegmentKind(kind)) if kind == "sea_freight"
        ));
    }

    #[test]
    fn test_kind_serde_identifiers() {
        let json = serde_json::to_string(&SegmentKind::HubToDestination).unwrap();
        assert_eq!(json, "\"hub_to_destination\"");

        let unknown: std::result::Result<SegmentKind, _> = serde_json::from_str("\"air\"");
        assert!(unknown.is_err());
    }

    #[test]
    fn test_transit_days_validation() {
        let segment = ShippingSegment::new(SegmentKind::OriginToHub, dec!(1), dec!(0))
            .with_transit_days(10, 7);
        assert!(!segment.has_valid_transit_days());
    }
}
