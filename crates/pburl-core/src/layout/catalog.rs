//! Pattern catalog: the recognized URL path shapes for each domain mode.

use regex::Regex;
use std::sync::OnceLock;

/// Version tag segment (`v1` / `v2`).
const VERSION_TAG: &str = r"^v[1-2]$";
/// A zone is identified purely by length: exactly six slug characters.
const ZONE_SLUG: &str = r"^[a-zA-Z0-9_-]{6}$";

// Managed CDN domain: a leading cloud-name segment precedes the shared layout.
const MANAGED_ZONE_WORKER: &str = r"^/([a-zA-Z0-9_-]*)/([a-zA-Z0-9_-]{6})/wrkr/(.*)$";
const MANAGED_WORKER: &str = r"^/([a-zA-Z0-9_-]*)/wrkr/(.*)$";
const MANAGED_ZONE_PATTERN: &str = r"^/([a-zA-Z0-9_-]*)/([a-zA-Z0-9_-]{6})/(.+)/(.*)$";
const MANAGED_PATTERN: &str = r"^/([a-zA-Z0-9_-]*)/(.+)/(.*)";

// Custom domain: no cloud name.
const CUSTOM_ZONE_WORKER: &str = r"^/([a-zA-Z0-9_-]{6})/wrkr/(.*)$";
const CUSTOM_WORKER: &str = r"^/wrkr/(.*)$";
const CUSTOM_ZONE_PATTERN: &str = r"^/([a-zA-Z0-9_-]{6})/(.+)/(.*)$";
const CUSTOM_PATTERN: &str = r"^/(.+)/(.*)";

/// Which host family a URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainMode {
    /// The managed CDN domain; paths carry a cloud name.
    Managed,
    /// A customer-owned domain; no cloud name, version tag mandatory.
    Custom,
}

impl DomainMode {
    pub fn from_custom_flag(is_custom_domain: bool) -> Self {
        if is_custom_domain {
            DomainMode::Custom
        } else {
            DomainMode::Managed
        }
    }
}

/// A recognized path shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    ZoneWorker,
    Worker,
    ZonePattern,
    Pattern,
}

/// Evaluation order of shapes. The first matching shape wins, so a path that
/// fits both a worker and a pattern shape is always a worker URL.
pub const SHAPE_PRECEDENCE: [Shape; 4] = [
    Shape::ZoneWorker,
    Shape::Worker,
    Shape::ZonePattern,
    Shape::Pattern,
];

struct Catalog {
    version_tag: Regex,
    zone_slug: Regex,
    managed: [Regex; 4],
    custom: [Regex; 4],
}

fn compile(pattern: &str) -> Regex {
    // Catalog patterns are constants exercised by the tests below.
    Regex::new(pattern).expect("static layout pattern must compile")
}

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog {
        version_tag: compile(VERSION_TAG),
        zone_slug: compile(ZONE_SLUG),
        managed: [
            compile(MANAGED_ZONE_WORKER),
            compile(MANAGED_WORKER),
            compile(MANAGED_ZONE_PATTERN),
            compile(MANAGED_PATTERN),
        ],
        custom: [
            compile(CUSTOM_ZONE_WORKER),
            compile(CUSTOM_WORKER),
            compile(CUSTOM_ZONE_PATTERN),
            compile(CUSTOM_PATTERN),
        ],
    })
}

fn shape_index(shape: Shape) -> usize {
    match shape {
        Shape::ZoneWorker => 0,
        Shape::Worker => 1,
        Shape::ZonePattern => 2,
        Shape::Pattern => 3,
    }
}

/// Matcher for `shape` under `mode`.
pub fn matcher(mode: DomainMode, shape: Shape) -> &'static Regex {
    let c = catalog();
    let set = match mode {
        DomainMode::Managed => &c.managed,
        DomainMode::Custom => &c.custom,
    };
    &set[shape_index(shape)]
}

/// First shape in [`SHAPE_PRECEDENCE`] whose matcher accepts `path`.
pub fn first_match(mode: DomainMode, path: &str) -> Option<Shape> {
    SHAPE_PRECEDENCE
        .into_iter()
        .find(|&shape| matcher(mode, shape).is_match(path))
}

pub fn is_version_tag(segment: &str) -> bool {
    catalog().version_tag.is_match(segment)
}

pub fn is_zone_slug(segment: &str) -> bool {
    catalog().zone_slug.is_match(segment)
}
