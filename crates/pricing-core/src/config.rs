//! 報價引擎配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PricingError, Result};

/// 建議零售價（PVP）利潤級距
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvpBracket {
    /// 級距下限（含）
    pub min_price: Decimal,

    /// 級距上限（不含），None 表示無上限
    pub max_price: Option<Decimal>,

    /// 零售利潤率（百分比）
    pub margin_percent: Decimal,
}

impl PvpBracket {
    /// 創建新的級距
    pub fn new(min_price: Decimal, max_price: Option<Decimal>, margin_percent: Decimal) -> Self {
        Self {
            min_price,
            max_price,
            margin_percent,
        }
    }

    /// 檢查 B2B 價格是否落在 [min_price, max_price) 內
    pub fn contains(&self, price: Decimal) -> bool {
        self.min_price <= price && self.max_price.map_or(true, |max| price < max)
    }

    /// 預設級距表
    ///
    /// [0,20)→50%、[20,50)→45%、[50,100)→40%、[100,200)→35%、[200,∞)→30%
    pub fn default_table() -> Vec<PvpBracket> {
        vec![
            PvpBracket::new(Decimal::ZERO, Some(Decimal::from(20)), Decimal::from(50)),
            PvpBracket::new(Decimal::from(20), Some(Decimal::from(50)), Decimal::from(45)),
            PvpBracket::new(Decimal::from(50), Some(Decimal::from(100)), Decimal::from(40)),
            PvpBracket::new(Decimal::from(100), Some(Decimal::from(200)), Decimal::from(35)),
            PvpBracket::new(Decimal::from(200), None, Decimal::from(30)),
        ]
    }
}

/// 報價引擎配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// 找不到利潤區間時使用的利潤率（百分比）
    pub default_profit_margin: Decimal,

    /// 平台服務費率（百分比）
    pub platform_fee_percent: Decimal,

    /// 建議零售價級距表
    pub pvp_brackets: Vec<PvpBracket>,

    /// 沒有級距命中時的零售利潤率
    pub pvp_default_percent: Decimal,

    /// 是否檢查重疊的利潤區間並發出警告
    pub warn_on_overlapping_ranges: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_profit_margin: Decimal::from(40),
            platform_fee_percent: Decimal::ZERO,
            pvp_brackets: PvpBracket::default_table(),
            pvp_default_percent: Decimal::from(35),
            warn_on_overlapping_ranges: true,
        }
    }
}

impl PricingConfig {
    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PricingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置預設利潤率
    pub fn with_default_profit_margin(mut self, percent: Decimal) -> Self {
        self.default_profit_margin = percent;
        self
    }

    /// 建構器模式：設置平台服務費率
    pub fn with_platform_fee_percent(mut self, percent: Decimal) -> Self {
        self.platform_fee_percent = percent;
        self
    }

    /// 建構器模式：設置零售級距表
    pub fn with_pvp_brackets(mut self, brackets: Vec<PvpBracket>) -> Self {
        self.pvp_brackets = brackets;
        self
    }

    /// 建構器模式：設置是否檢查重疊區間
    pub fn with_overlap_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_overlapping_ranges = enabled;
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.platform_fee_percent < Decimal::ZERO {
            return Err(PricingError::InvalidConfig(format!(
                "平台服務費率不可為負: {}",
                self.platform_fee_percent
            )));
        }

        if self.pvp_brackets.is_empty() {
            return Err(PricingError::InvalidConfig("零售級距表不可為空".to_string()));
        }

        Ok(())
    }
}
