use crate::{dom::Dom, logging::LogLevel};

pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;
pub const DEFAULT_PARTICLE_COUNT: usize = 20;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const MOBILE_BREAKPOINT_BOUNDS: (u32, u32) = (240, 4_096);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 200);

const MOBILE_BREAKPOINT_ATTRIBUTE: &str = "data-mobile-breakpoint";
const PARTICLE_COUNT_ATTRIBUTE: &str = "data-particle-count";
const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub mobile_breakpoint: f64,
    pub particle_count: usize,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: f64::from(DEFAULT_MOBILE_BREAKPOINT),
            particle_count: DEFAULT_PARTICLE_COUNT,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PageConfig {
    /// Reads overrides from `data-*` attributes on the document root.
    pub fn from_document<D: Dom>(dom: &D) -> Self {
        let Some(root) = dom.document_element() else {
            return Self::default();
        };

        let mobile_breakpoint = parse_u32_with_bounds(
            dom.attribute(&root, MOBILE_BREAKPOINT_ATTRIBUTE),
            DEFAULT_MOBILE_BREAKPOINT,
            MOBILE_BREAKPOINT_BOUNDS,
        );
        let particle_count = parse_usize_with_bounds(
            dom.attribute(&root, PARTICLE_COUNT_ATTRIBUTE),
            DEFAULT_PARTICLE_COUNT,
            PARTICLE_COUNT_BOUNDS,
        );
        let log_level = dom
            .attribute(&root, LOG_LEVEL_ATTRIBUTE)
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            mobile_breakpoint: f64::from(mobile_breakpoint),
            particle_count,
            log_level,
        }
    }
}

fn parse_u32_with_bounds(raw: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_usize_with_bounds(raw: Option<String>, default: usize, bounds: (usize, usize)) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
