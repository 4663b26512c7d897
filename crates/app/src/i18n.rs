//! Localized labels for the text views.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
    Zh,
}

/// Every user-facing word the views need, in one language.
#[derive(Debug)]
pub struct Labels {
    pub recorded_expenses: &'static str,
    pub total: &'static str,
    pub participants: &'static str,
    pub paid: &'static str,
    pub pays: &'static str,
    pub transactions: &'static str,
    pub equal_split: &'static str,
    pub no_transactions: &'static str,
    pub settle_title: &'static str,
}

const EN: Labels = Labels {
    recorded_expenses: "Recorded Expenses",
    total: "Total",
    participants: "Participants",
    paid: "paid",
    pays: "pays",
    transactions: "Transactions",
    equal_split: "Equal Split",
    no_transactions: "No transactions needed!",
    settle_title: "Settlement Plan",
};

const TH: Labels = Labels {
    recorded_expenses: "ค่าใช้จ่ายที่บันทึกไว้",
    total: "ยอดรวม",
    participants: "ผู้ร่วมจ่าย",
    paid: "จ่ายแล้ว",
    pays: "จ่ายให้",
    transactions: "ธุรกรรม",
    equal_split: "จ่ายคนละ",
    no_transactions: "ไม่มีหนี้ค้างชำระ!",
    settle_title: "แผนการชำระหนี้",
};

const ZH: Labels = Labels {
    recorded_expenses: "已记录的费用",
    total: "总计",
    participants: "参与者",
    paid: "已支付",
    pays: "支付",
    transactions: "交易",
    equal_split: "均摊",
    no_transactions: "无需交易！",
    settle_title: "结算方案",
};

impl Language {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
            Language::Zh => "zh",
        }
    }

    #[must_use]
    pub const fn labels(self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Th => &TH,
            Language::Zh => &ZH,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "th" => Ok(Language::Th),
            "zh" => Ok(Language::Zh),
            other => Err(format!("unsupported language: {other} (expected en, th or zh)")),
        }
    }
}
