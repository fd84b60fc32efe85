use super::Summary;
use crate::error::BridgeResult;
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartyMember {
    #[serde(rename = "Name", alias = "name")]
    pub nickname: String,
    #[serde(rename = "Type", alias = "type")]
    pub species: String,
    #[serde(rename = "Exp", alias = "exp")]
    pub exp: u32,
    #[serde(rename = "Hp", alias = "hp")]
    pub hp: u32,
    #[serde(rename = "MaxHp", alias = "maxHp", alias = "max_hp")]
    pub max_hp: u32,
    #[serde(rename = "Level", alias = "level")]
    pub level: u32,
    #[serde(rename = "Status", alias = "status")]
    pub status: u32,
}

impl PartyMember {
    pub fn display_name(&self) -> String {
        format!("{}({})", self.nickname, self.species)
    }
}

/// Members in party slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PartyRoster {
    pub members: Vec<PartyMember>,
}

impl PartyRoster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

pub fn parse_party(json: &[u8]) -> BridgeResult<PartyRoster> {
    Ok(serde_json::from_slice(json)?)
}

pub fn render_party(roster: &PartyRoster) -> Summary {
    let mut body = String::new();
    for (i, member) in roster.members.iter().enumerate() {
        let _ = writeln!(body, "Pokemon {}:", i + 1);
        let _ = writeln!(body, "\tName: {}", member.display_name());
        let _ = writeln!(body, "\tLevel: {}", member.level);
        let _ = writeln!(body, "\tHp: {}/{}", member.hp, member.max_hp);
        body.push('\n');
    }
    Summary {
        title: format!("You have {} Pokemen", roster.len()),
        body,
    }
}
