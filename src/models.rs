use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single grid cell or vertex on a discovery board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// What a `Build` board is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuildGoal {
    Area(f64),
    Perimeter(f64),
    Points(usize),
}

/// The kind of interactive discovery board attached to a question, plus its
/// static configuration. Dispatch happens in the evaluator, not in the
/// catalog data.
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    /// Turn a shape until it matches a target angle (degrees, mod 360).
    Rotate { target_rotation: i32 },
    /// Reflect the source points across the vertical midline of the grid.
    Mirror {
        grid_size: i32,
        source_points: Vec<Point>,
    },
    /// Slide a shape onto a target outline.
    Match { grid_size: i32, target_offset: Point },
    /// Free measurement board; correctness comes from the option check.
    Measure { grid_size: i32 },
    /// Build a shape with a given area, perimeter, or cell count.
    Build { grid_size: i32, goal: BuildGoal },
}

impl Template {
    pub fn grid_size(&self) -> i32 {
        match self {
            Template::Rotate { .. } => 8,
            Template::Mirror { grid_size, .. }
            | Template::Match { grid_size, .. }
            | Template::Measure { grid_size }
            | Template::Build { grid_size, .. } => *grid_size,
        }
    }

    /// Points pre-filled on the board before the user touches it. Source
    /// points on a mirror board are rendered, not pre-filled.
    pub fn initial_points(&self) -> Vec<Point> {
        Vec::new()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Template::Rotate { .. } => "rotate",
            Template::Mirror { .. } => "mirror",
            Template::Match { .. } => "match",
            Template::Measure { .. } => "measure",
            Template::Build { .. } => "build",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub sub_prompt: Option<&'static str>,
    pub explanation: &'static str,
    pub options: Vec<&'static str>,
    pub correct: Option<usize>,
    pub template: Option<Template>,
}

impl Question {
    pub fn choice(
        id: &'static str,
        prompt: &'static str,
        options: Vec<&'static str>,
        correct: usize,
        explanation: &'static str,
    ) -> Self {
        Self {
            id,
            prompt,
            sub_prompt: None,
            explanation,
            options,
            correct: Some(correct),
            template: None,
        }
    }

    pub fn discovery(
        id: &'static str,
        prompt: &'static str,
        template: Template,
        explanation: &'static str,
    ) -> Self {
        Self {
            id,
            prompt,
            sub_prompt: None,
            explanation,
            options: Vec::new(),
            correct: None,
            template: Some(template),
        }
    }

    pub fn with_sub_prompt(mut self, sub: &'static str) -> Self {
        self.sub_prompt = Some(sub);
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    /// Boards can be rendered alongside options; when options exist they are
    /// the mechanism that gets scored.
    pub fn scored_by_options(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Descriptive only; no behavior branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Explore,
    Quiz,
}

#[derive(Debug, Clone)]
pub struct Step {
    pub id: &'static str,
    pub kind: StepKind,
    pub questions: Vec<Question>,
}

/// The unit of completion and locking.
#[derive(Debug, Clone)]
pub struct Level {
    pub id: &'static str,
    pub title: &'static str,
    pub steps: Vec<Step>,
}

impl Level {
    pub fn question_count(&self) -> usize {
        self.steps.iter().map(|s| s.questions.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct Module {
    pub id: &'static str,
    pub title: &'static str,
    pub levels: Vec<Level>,
}

#[derive(Debug, Clone)]
pub struct World {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub modules: Vec<Module>,
}

impl World {
    /// Levels in path order, across all modules.
    pub fn levels(&self) -> impl Iterator<Item = &Level> {
        self.modules.iter().flat_map(|m| m.levels.iter())
    }
}

#[derive(Debug, Clone)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub coming_soon: bool,
    pub worlds: Vec<World>,
}

impl Course {
    /// Full ordered flattening of every level in the course.
    pub fn flattened_levels(&self) -> Vec<&Level> {
        self.worlds.iter().flat_map(|w| w.levels()).collect()
    }

    pub fn level_count(&self) -> usize {
        self.worlds.iter().map(|w| w.levels().count()).sum()
    }
}

/// The one durable, mutable record. Serialized wholesale to the save file
/// after every transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub completed_levels: BTreeSet<String>,
    pub score: u32,
    pub onboarding_done: bool,
    pub streak: u32,
    pub last_completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub preferences: BTreeMap<String, String>,
}

impl UserProgress {
    pub fn is_completed(&self, level_id: &str) -> bool {
        self.completed_levels.contains(level_id)
    }
}

// JSON output wrapper for CLI
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
