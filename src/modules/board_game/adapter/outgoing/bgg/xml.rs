//! Regex extraction over BGG XML API2 documents.
//!
//! The API only ever returns a handful of flat tags per item, so each value
//! is read from the first matching tag rather than through a full XML tree.

use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::board_game::application::domain::entities::{BggGame, BggSearchResult};

/// Pre-compiled patterns for `thing` and `search` responses.
pub struct BggXmlParser {
    item: Regex,
    name: Regex,
    description: Regex,
    image: Regex,
    thumbnail: Regex,
    min_players: Regex,
    max_players: Regex,
    playing_time: Regex,
    min_age: Regex,
    year_published: Regex,
    average: Regex,
    average_weight: Regex,
    link: Regex,
    attribute: Regex,
    html_tag: Regex,
    numeric_entity: Regex,
    search_item: Regex,
}

fn value_attr(tag: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r#"(?i)<{tag}\b[^>]*\bvalue="([^"]*)""#))
}

fn text_of(tag: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?is)<{tag}\b[^>]*>(.*?)</{tag}>"))
}

fn first(re: &Regex, xml: &str) -> Option<String> {
    re.captures(xml).map(|c| c[1].to_string())
}

fn positive_int(raw: Option<String>) -> Option<i32> {
    raw.and_then(|v| v.trim().parse::<i32>().ok())
        .filter(|v| *v != 0)
}

fn positive_float(raw: Option<String>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| *v != 0.0)
}

impl BggXmlParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            item: Regex::new(r"(?i)<item[\s/>]")?,
            name: value_attr("name")?,
            description: text_of("description")?,
            image: text_of("image")?,
            thumbnail: text_of("thumbnail")?,
            min_players: value_attr("minplayers")?,
            max_players: value_attr("maxplayers")?,
            playing_time: value_attr("playingtime")?,
            min_age: value_attr("minage")?,
            year_published: value_attr("yearpublished")?,
            average: value_attr("average")?,
            average_weight: value_attr("averageweight")?,
            link: Regex::new(r"(?i)<link\b([^>]*)>")?,
            attribute: Regex::new(r#"(\w+)="([^"]*)""#)?,
            html_tag: Regex::new(r"<[^>]*>")?,
            numeric_entity: Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);")?,
            search_item: Regex::new(r#"(?is)<item\b[^>]*\bid="(\d+)"[^>]*>(.*?)</item>"#)?,
        })
    }

    pub fn decode_entities(&self, text: &str) -> String {
        let decoded = self
            .numeric_entity
            .replace_all(text, |caps: &Captures| {
                let code = &caps[1];
                let parsed = match code.strip_prefix('x') {
                    Some(hex) => u32::from_str_radix(hex, 16).ok(),
                    None => code.parse::<u32>().ok(),
                };
                parsed
                    .and_then(char::from_u32)
                    .map(String::from)
                    .unwrap_or_default()
            })
            .into_owned();

        decoded
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&")
    }

    /// Parses a `thing?id=..&stats=1` response. `None` when it holds no item.
    pub fn parse_thing(&self, bgg_id: i32, xml: &str) -> Option<BggGame> {
        if !self.item.is_match(xml) {
            return None;
        }

        let text = |re: &Regex| {
            first(re, xml)
                .map(|v| self.decode_entities(v.trim()))
                .filter(|v| !v.is_empty())
        };

        let description = text(&self.description).map(|d| {
            self.html_tag
                .replace_all(&d, "")
                .trim()
                .to_string()
        });

        let mut links: HashMap<String, Vec<String>> = HashMap::new();
        for caps in self.link.captures_iter(xml) {
            let attrs: HashMap<&str, &str> = self
                .attribute
                .captures_iter(caps.get(1).map_or("", |m| m.as_str()))
                .filter_map(|a| Some((a.get(1)?.as_str(), a.get(2)?.as_str())))
                .collect();
            if let (Some(kind), Some(value)) = (attrs.get("type"), attrs.get("value")) {
                links
                    .entry(kind.to_string())
                    .or_default()
                    .push(self.decode_entities(value));
            }
        }
        let mut take = |kind: &str| links.remove(kind).unwrap_or_default();

        Some(BggGame {
            bgg_id,
            name: first(&self.name, xml)
                .map(|n| self.decode_entities(&n))
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            description: description.filter(|d| !d.is_empty()),
            image: text(&self.image),
            thumbnail: text(&self.thumbnail),
            min_players: positive_int(first(&self.min_players, xml)),
            max_players: positive_int(first(&self.max_players, xml)),
            playing_time: positive_int(first(&self.playing_time, xml)),
            min_age: positive_int(first(&self.min_age, xml)),
            categories: take("boardgamecategory"),
            mechanics: take("boardgamemechanic"),
            designers: take("boardgamedesigner"),
            publishers: take("boardgamepublisher"),
            year_published: positive_int(first(&self.year_published, xml)),
            complexity: positive_float(first(&self.average_weight, xml)),
            rating: positive_float(first(&self.average, xml)),
        })
    }

    pub fn parse_search(&self, xml: &str) -> Vec<BggSearchResult> {
        self.search_item
            .captures_iter(xml)
            .filter_map(|caps| {
                let bgg_id = caps[1].parse::<i32>().ok()?;
                let body = &caps[2];
                Some(BggSearchResult {
                    bgg_id,
                    name: first(&self.name, body)
                        .map(|n| self.decode_entities(&n))
                        .unwrap_or_else(|| "Unknown".to_string()),
                    year_published: positive_int(first(&self.year_published, body)),
                })
            })
            .collect()
    }
}
