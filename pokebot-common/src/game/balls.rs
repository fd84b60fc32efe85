use super::Summary;
use crate::error::BridgeResult;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pokeball {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "count")]
    pub count: u32,
}

/// `count` is reported by the game and is not checked against `balls`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PokeballInventory {
    #[serde(alias = "count")]
    pub count: u32,
    #[serde(alias = "balls")]
    pub balls: Vec<Pokeball>,
}

pub fn parse_balls(json: &[u8]) -> BridgeResult<PokeballInventory> {
    Ok(serde_json::from_slice(json)?)
}

pub fn render_balls(inventory: &PokeballInventory) -> Summary {
    let mut body = String::new();
    for ball in &inventory.balls {
        let _ = writeln!(body, "{}: {}", ball.name, ball.count);
    }
    Summary {
        title: format!("You have {} balls", inventory.count),
        body,
    }
}
