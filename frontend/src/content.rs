//! Static site content: past events, gallery media and client logos.
//!
//! The JSON files under `data/` are embedded at compile time and parsed once
//! on first access. Field names follow the JSON exactly.

use once_cell::sync::Lazy;
use serde::Deserialize;

const WORKS_JSON: &str = include_str!("../data/works.json");
const GALLERY_JSON: &str = include_str!("../data/gallery.json");
const CLIENTS_JSON: &str = include_str!("../data/clients.json");

/// How many works the home page shows before "View All Events".
pub const FEATURED_WORK_COUNT: usize = 6;
/// How many gallery tiles the home page grid shows.
pub const HOME_GALLERY_COUNT: usize = 8;

const PLACEHOLDER_LOGO: &str = "/placeholder.svg";

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct WorkLinks {
    pub youtube: Option<String>,
    pub instagram: Option<String>,
    pub other: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WorkTestimonial {
    pub name: String,
    pub role: String,
    pub comment: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub links: Option<WorkLinks>,
    #[serde(default)]
    pub testimonials: Vec<WorkTestimonial>,
}

impl WorkItem {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Long-form text for the detail page, falling back to the card blurb.
    pub fn detail_text(&self) -> &str {
        self.full_description.as_deref().unwrap_or(&self.description)
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TileSize {
    Tall,
    Standard,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub image_path: String,
    #[serde(default)]
    pub thumbnail_path: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    pub caption: String,
    #[serde(default)]
    pub size: Option<TileSize>,
}

impl GalleryItem {
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// Image shown in a tile: videos prefer their thumbnail.
    pub fn preview_path(&self) -> &str {
        match self.kind {
            MediaKind::Video => self.thumbnail_path.as_deref().unwrap_or(&self.image_path),
            MediaKind::Image => &self.image_path,
        }
    }

    /// Explicit size from the data file, otherwise every third tile is tall.
    pub fn tile_size(&self, index: usize) -> TileSize {
        self.size.unwrap_or_else(|| tile_size_for(index))
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
}

impl Client {
    /// Logo to render, or `None` when only the name should be shown.
    pub fn logo(&self) -> Option<&str> {
        self.logo_path
            .as_deref()
            .filter(|path| !path.is_empty() && *path != PLACEHOLDER_LOGO)
    }
}

fn parse_or_log<T: for<'de> Deserialize<'de>>(name: &str, raw: &str) -> Vec<T> {
    match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to parse {}: {}", name, e);
            Vec::new()
        }
    }
}

static WORKS: Lazy<Vec<WorkItem>> = Lazy::new(|| parse_or_log("works.json", WORKS_JSON));
static GALLERY: Lazy<Vec<GalleryItem>> = Lazy::new(|| parse_or_log("gallery.json", GALLERY_JSON));
static CLIENTS: Lazy<Vec<Client>> = Lazy::new(|| parse_or_log("clients.json", CLIENTS_JSON));

pub fn works() -> &'static [WorkItem] {
    &WORKS
}

pub fn gallery() -> &'static [GalleryItem] {
    &GALLERY
}

pub fn clients() -> &'static [Client] {
    &CLIENTS
}

pub fn featured_works() -> &'static [WorkItem] {
    let all = works();
    &all[..all.len().min(FEATURED_WORK_COUNT)]
}

/// First record whose id matches. The list is small, a scan is enough.
pub fn find_work(id: &str) -> Option<&'static WorkItem> {
    find_in(works(), id)
}

fn find_in<'a>(items: &'a [WorkItem], id: &str) -> Option<&'a WorkItem> {
    items.iter().find(|work| work.id == id)
}

pub fn tile_size_for(index: usize) -> TileSize {
    if index % 3 == 0 {
        TileSize::Tall
    } else {
        TileSize::Standard
    }
}

/// Full gallery page: every fifth tile spans two columns and rows.
pub fn is_featured_tile(index: usize) -> bool {
    index % 5 == 0
}

/// The home page grid: the first few gallery items with their tile size.
pub fn home_gallery_tiles() -> Vec<(&'static GalleryItem, TileSize)> {
    gallery()
        .iter()
        .take(HOME_GALLERY_COUNT)
        .enumerate()
        .map(|(i, item)| (item, item.tile_size(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_files_parse() {
        assert!(!works().is_empty());
        assert!(!gallery().is_empty());
        assert!(!clients().is_empty());
    }

    #[test]
    fn work_ids_are_unique() {
        let mut ids: Vec<&str> = works().iter().map(|w| w.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn find_work_returns_matching_record() {
        let work = find_work("bayer-family-day").expect("bundled work");
        assert_eq!(work.title, "Bayer Family Day");
        assert_eq!(work.testimonials.len(), 1);
    }

    #[test]
    fn find_work_unknown_id_is_none() {
        assert!(find_work("no-such-event").is_none());
        assert!(find_work("").is_none());
    }

    #[test]
    fn find_returns_first_duplicate() {
        let raw = r#"[
            {"id": "a", "title": "First", "description": "x"},
            {"id": "a", "title": "Second", "description": "y"}
        ]"#;
        let items: Vec<WorkItem> = serde_json::from_str(raw).unwrap();
        assert_eq!(find_in(&items, "a").unwrap().title, "First");
    }

    #[test]
    fn optional_work_fields_default() {
        let raw = r#"{"id": "bare", "title": "Bare", "description": "Only the basics"}"#;
        let work: WorkItem = serde_json::from_str(raw).unwrap();
        assert!(work.cover_image().is_none());
        assert!(work.links.is_none());
        assert!(work.testimonials.is_empty());
        assert_eq!(work.detail_text(), "Only the basics");
    }

    #[test]
    fn full_description_wins_on_detail_page() {
        let raw = r#"{"id": "w", "title": "W", "description": "short", "fullDescription": "long"}"#;
        let work: WorkItem = serde_json::from_str(raw).unwrap();
        assert_eq!(work.detail_text(), "long");
    }

    #[test]
    fn featured_is_capped_at_six() {
        assert!(featured_works().len() <= FEATURED_WORK_COUNT);
        assert_eq!(featured_works().first(), works().first());
    }

    #[test]
    fn gallery_type_field_maps_to_kind() {
        let raw = r#"{"id": 7, "type": "video", "imagePath": "/a.png", "thumbnailPath": "/t.png", "caption": "c"}"#;
        let item: GalleryItem = serde_json::from_str(raw).unwrap();
        assert!(item.is_video());
        assert_eq!(item.preview_path(), "/t.png");
    }

    #[test]
    fn every_third_tile_is_tall_unless_overridden() {
        assert_eq!(tile_size_for(0), TileSize::Tall);
        assert_eq!(tile_size_for(1), TileSize::Standard);
        assert_eq!(tile_size_for(3), TileSize::Tall);

        let raw = r#"{"id": 1, "type": "image", "imagePath": "/a.png", "caption": "c", "size": "standard"}"#;
        let item: GalleryItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.tile_size(0), TileSize::Standard);
    }

    #[test]
    fn home_grid_honours_sizes_from_data() {
        let tiles = home_gallery_tiles();
        assert_eq!(tiles.len(), HOME_GALLERY_COUNT);
        assert_eq!(tiles[0].1, TileSize::Tall);
        assert_eq!(tiles[1].1, TileSize::Standard);
        // id 3 is marked tall in gallery.json even though its slot is not
        assert_eq!(tiles[2].0.id, 3);
        assert_eq!(tiles[2].1, TileSize::Tall);
    }

    #[test]
    fn placeholder_logos_render_as_names() {
        let with_placeholder = Client { id: 1, name: "A".into(), logo_path: Some(PLACEHOLDER_LOGO.into()) };
        let with_logo = Client { id: 2, name: "B".into(), logo_path: Some("/b.png".into()) };
        assert_eq!(with_placeholder.logo(), None);
        assert_eq!(with_logo.logo(), Some("/b.png"));
    }

    #[test]
    fn featured_tiles_every_fifth() {
        assert!(is_featured_tile(0));
        assert!(!is_featured_tile(4));
        assert!(is_featured_tile(5));
    }
}
