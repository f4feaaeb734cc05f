//! 運輸路線模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::segment::{SegmentKind, ShippingSegment};
use crate::{PricingError, Result};

/// 運輸路線（起運地 → [轉運中心 →] 目的地）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// 路線ID
    pub id: Uuid,

    /// 路線名稱
    pub name: String,

    /// 是否直達
    pub is_direct: bool,

    /// 依序排列的運輸段
    pub segments: Vec<ShippingSegment>,

    /// 是否啟用
    pub is_active: bool,
}

impl Route {
    /// 創建直達路線（單一直達段）
    pub fn direct(name: String, mut segment: ShippingSegment) -> Self {
        segment.kind = SegmentKind::DirectOriginToDestination;
        Self {
            id: Uuid::new_v4(),
            name,
            is_direct: true,
            segments: vec![segment],
            is_active: true,
        }
    }

    /// 創建經轉運中心的路線（起運地 → 轉運中心 → 目的地）
    pub fn via_hub(name: String, mut first: ShippingSegment, mut second: ShippingSegment) -> Self {
        first.kind = SegmentKind::OriginToHub;
        second.kind = SegmentKind::HubToDestination;
        Self {
            id: Uuid::new_v4(),
            name,
            is_direct: false,
            segments: vec![first, second],
            is_active: true,
        }
    }

    /// 建構器模式：設置為停用
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// 啟用中的運輸段
    pub fn active_segments(&self) -> impl Iterator<Item = &ShippingSegment> {
        self.segments.iter().filter(|s| s.is_active)
    }

    /// 驗證路線形狀
    ///
    /// 直達路線必須只有一個直達段；轉運路線必須依序為
    /// 起運地 → 轉運中心、轉運中心 → 目的地。
    pub fn validate(&self) -> Result<()> {
        let kinds: Vec<SegmentKind> = self.segments.iter().map(|s| s.kind).collect();

        let expected: &[SegmentKind] = if self.is_direct {
            &[SegmentKind::DirectOriginToDestination]
        } else {
            &[SegmentKind::OriginToHub, SegmentKind::HubToDestination]
        };

        if kinds != expected {
            return Err(PricingError::InvalidRoute(format!(
                "路線 {} 的運輸段為 {:?}，預期 {:?}",
                self.name, kinds, expected
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_direct_route_shape() {
        let route = Route::direct(
            "CN-HT Air".to_string(),
            ShippingSegment::new(SegmentKind::OriginToHub, dec!(5), dec!(3)),
        );

        assert!(route.is_direct);
        assert_eq!(route.segments.len(), 1);
        assert_eq!(route.segments[0].kind, SegmentKind::DirectOriginToDestination);
        assert!(route.validate().is_ok());
    }

    #[test]
    fn test_hub_route_shape() {
        let route = Route::via_hub(
            "CN-US-HT".to_string(),
            ShippingSegment::new(SegmentKind::HubToDestination, dec!(4), dec!(10)),
            ShippingSegment::new(SegmentKind::OriginToHub, dec!(2), dec!(5)).inactive(),
        );

        assert_eq!(route.segments[0].kind, SegmentKind::OriginToHub);
        assert_eq!(route.segments[1].kind, SegmentKind::HubToDestination);
        assert_eq!(route.active_segments().count(), 1);
        assert!(route.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_mixed_shape() {
        let mut route = Route::direct(
            "broken".to_string(),
            ShippingSegment::new(SegmentKind::DirectOriginToDestination, dec!(1), dec!(1)),
        );
        route.segments.push(ShippingSegment::new(
            SegmentKind::HubToDestination,
            dec!(1),
            dec!(1),
        ));

        assert!(matches!(route.validate(), Err(PricingError::InvalidRoute(_))));
    }
}
