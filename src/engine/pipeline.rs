use crate::dom::css::parse_inline_style;
use crate::dom::parser::parse_html;
use crate::dom::{DomNode, DomTree};
use crate::info::{generate_cards, CardColumns};
use crate::input::InteractionProfile;
use crate::render::animator::{Animator, BodyMotion, OrbitTask};

use egui::Color32;

/// Seconds per revolution for each known body (pointer-fine tuning;
/// the touch profile adds its bias on top).
const BODY_PERIODS: &[(&str, f32)] = &[
    ("mercury", 10.0),
    ("venus", 20.0),
    ("earth", 30.0),
    ("mars", 40.0),
    ("jupiter", 50.0),
    ("saturn", 60.0),
    ("uranus", 70.0),
    ("neptune", 80.0),
];

/// Period for bodies missing from the table.
const FALLBACK_PERIOD_SECS: f32 = 60.0;

/// Stage dimensions when the markup gives none.
const DEFAULT_STAGE_WIDTH: f32 = 800.0;
const DEFAULT_STAGE_HEIGHT: f32 = 600.0;

/// Body presentation when the markup gives none.
const DEFAULT_BODY_SIZE: f32 = 14.0;
const DEFAULT_BODY_COLOR: Color32 = Color32::from_rgb(160, 160, 160);

/// Error during scene construction
pub struct PageError {
    pub message: String,
    pub phase: &'static str,
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

/// The stage element's fixed pixel dimensions.
#[derive(Debug, Clone, Copy)]
pub struct StageSize {
    pub width: f32,
    pub height: f32,
}

/// One resolved body: everything the animator and presenters need,
/// measured once at setup.
#[derive(Debug, Clone)]
pub struct ResolvedBody {
    /// Lowercase body name from the element id ("planet-earth" → "earth")
    pub name: String,
    /// Display label: the name, uppercased
    pub label: String,
    /// Orbit radii: half the container's inline width/height
    pub radius_x: f32,
    pub radius_y: f32,
    /// Seconds per revolution, profile bias applied
    pub period_secs: f32,
    /// Fill color and diameter from the body element's inline style
    pub color: Color32,
    pub size: f32,
    /// Raw info metadata, parsed on demand
    pub info: Option<String>,
}

/// Resolved page structure, built once at setup and passed by
/// reference into each component. Missing optional pieces degrade the
/// matching feature instead of failing the build.
pub struct PageContext {
    pub stage: StageSize,
    pub has_toggle: bool,
    pub has_overlay: bool,
    pub has_card_columns: bool,
    pub bodies: Vec<ResolvedBody>,
    /// Every planet element's name and raw metadata in document order,
    /// kept separately from `bodies` so a body whose orbit failed to
    /// resolve still feeds card generation.
    pub card_entries: Vec<(String, Option<String>)>,
}

/// A fully constructed scene.
pub struct Scene {
    pub tree: DomTree,
    pub context: PageContext,
    pub animator: Animator,
    pub cards: CardColumns,
}

/// The scene pipeline: Parse → Resolve → Animate → Cards
pub struct SceneEngine {
    profile: InteractionProfile,
}

impl SceneEngine {
    pub fn new(profile: InteractionProfile) -> Self {
        Self { profile }
    }

    /// Build the scene from raw page markup.
    pub fn build_scene(&self, html: &str) -> Result<Scene, PageError> {
        // Phase 1: Parse
        let tree = parse_html(html);

        // Phase 2: Resolve page structure
        let context = self.resolve_context(&tree)?;

        // Phase 3: Orbit tasks, one per resolved body, phase zero
        let tasks: Vec<OrbitTask> = context
            .bodies
            .iter()
            .map(|body| {
                OrbitTask::new(
                    body.name.clone(),
                    BodyMotion::new(body.radius_x, body.radius_y, body.period_secs),
                )
            })
            .collect();
        let animator = Animator::new(tasks);

        // Phase 4: Cards, from every planet element in document order;
        // a body that lost its animation keeps its card
        let cards = generate_cards(
            context
                .card_entries
                .iter()
                .map(|(name, info)| (name.as_str(), info.as_deref())),
        );

        log::debug!(
            "scene built: {} bodies animated, {} cards, {} dom nodes",
            context.bodies.len(),
            cards.total(),
            tree.node_count()
        );

        Ok(Scene {
            tree,
            context,
            animator,
            cards,
        })
    }

    fn resolve_context(&self, tree: &DomTree) -> Result<PageContext, PageError> {
        let root = &tree.root;

        let stage_node = root.find_by_id("solar-system").ok_or_else(|| PageError {
            message: "page has no #solar-system stage".to_string(),
            phase: "resolve",
        })?;
        let stage_style = parse_inline_style(stage_node.attr("style").unwrap_or(""));
        let stage = StageSize {
            width: stage_style.width.unwrap_or(DEFAULT_STAGE_WIDTH),
            height: stage_style.height.unwrap_or(DEFAULT_STAGE_HEIGHT),
        };

        let has_toggle = root.find_by_class("mode-toggle").is_some();
        if !has_toggle {
            log::warn!("page has no mode toggle control, toggling is a no-op");
        }

        let mut has_overlay = true;
        for id in ["planet-info", "planet-name", "planet-details"] {
            if root.find_by_id(id).is_none() {
                log::warn!("page has no #{} element, overlay disabled", id);
                has_overlay = false;
            }
        }

        let has_card_columns = root.find_by_class("planet-cards-left").is_some()
            && root.find_by_class("planet-cards-right").is_some();
        if !has_card_columns {
            log::warn!("page has no card columns, cards disabled");
        }

        let mut bodies = Vec::new();
        let mut card_entries = Vec::new();
        for planet in root.find_all_by_class("planet") {
            card_entries.push((
                body_name(planet).unwrap_or("unnamed").to_string(),
                planet.attr("data-info").map(String::from),
            ));
            match self.resolve_body(root, planet) {
                Ok(body) => bodies.push(body),
                // one body failing must not take the others down
                Err(err) => log::error!("{}", err),
            }
        }

        Ok(PageContext {
            stage,
            has_toggle,
            has_overlay,
            has_card_columns,
            bodies,
            card_entries,
        })
    }

    fn resolve_body(&self, root: &DomNode, planet: &DomNode) -> Result<ResolvedBody, PageError> {
        let name = body_name(planet)
            .ok_or_else(|| PageError {
                message: "planet element without an id".to_string(),
                phase: "resolve",
            })?
            .to_string();
        let label = name.to_uppercase();

        let orbit_class = format!("{}-orbit", name);
        let orbit = root.find_by_class(&orbit_class).ok_or_else(|| PageError {
            message: format!("no .{} container for body '{}'", orbit_class, name),
            phase: "resolve",
        })?;

        // Measured once; resizes do not re-measure.
        let orbit_style = parse_inline_style(orbit.attr("style").unwrap_or(""));
        let (width, height) = match (orbit_style.width, orbit_style.height) {
            (Some(w), Some(h)) => (w, h),
            _ => {
                return Err(PageError {
                    message: format!(".{} has no inline dimensions", orbit_class),
                    phase: "resolve",
                })
            }
        };

        let period = BODY_PERIODS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, secs)| *secs)
            .unwrap_or_else(|| {
                log::warn!(
                    "no period for body '{}', using {}s",
                    name,
                    FALLBACK_PERIOD_SECS
                );
                FALLBACK_PERIOD_SECS
            });

        let planet_style = parse_inline_style(planet.attr("style").unwrap_or(""));

        Ok(ResolvedBody {
            name,
            label,
            radius_x: width / 2.0,
            radius_y: height / 2.0,
            period_secs: period + self.profile.period_bias_secs,
            color: planet_style.background_color.unwrap_or(DEFAULT_BODY_COLOR),
            size: planet_style.width.unwrap_or(DEFAULT_BODY_SIZE),
            info: planet.attr("data-info").map(String::from),
        })
    }
}

/// Body name from the element id: the segment after `planet-`.
fn body_name(planet: &DomNode) -> Option<&str> {
    planet.id().map(|id| id.strip_prefix("planet-").unwrap_or(id))
}
