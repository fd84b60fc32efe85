use super::Summary;
use crate::error::BridgeResult;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainerProfile {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "rival")]
    pub rival: String,
    #[serde(alias = "money")]
    pub money: u32,
    /// One bit per Johto badge.
    #[serde(alias = "johto")]
    pub johto: u8,
    /// One bit per Kanto badge.
    #[serde(alias = "kanto")]
    pub kanto: u8,
}

impl TrainerProfile {
    pub fn johto_badges(&self) -> u32 {
        badge_count(self.johto)
    }

    pub fn kanto_badges(&self) -> u32 {
        badge_count(self.kanto)
    }
}

pub fn badge_count(mask: u8) -> u32 {
    mask.count_ones()
}

pub fn parse_trainer(json: &[u8]) -> BridgeResult<TrainerProfile> {
    Ok(serde_json::from_slice(json)?)
}

pub fn render_trainer(trainer: &TrainerProfile) -> Summary {
    let mut body = String::new();
    let _ = writeln!(body, "Name: {}", trainer.name);
    let _ = writeln!(body, "Rival name: {}", trainer.rival);
    let _ = writeln!(body, "Money: {}", trainer.money);
    let _ = writeln!(body, "Johto badges: {}", trainer.johto_badges());
    let _ = writeln!(body, "Kanto badges: {}", trainer.kanto_badges());
    Summary {
        title: "Trainer info".to_string(),
        body,
    }
}
