//! Look-up table of worked scenarios for every exercise

use lazy_static::lazy_static;

use crate::error::Result;
use crate::list::SinglyLinkedList;
use crate::{longest, nearest_min, top_words, unique};

/// The five exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    LongestString,
    FirstUnique,
    NearestMinimum,
    TopWords,
    RotateList,
}

impl Exercise {
    pub const ALL: [Exercise; 5] = [
        Exercise::LongestString,
        Exercise::FirstUnique,
        Exercise::NearestMinimum,
        Exercise::TopWords,
        Exercise::RotateList,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Exercise::LongestString => "longest-string",
            Exercise::FirstUnique => "first-unique",
            Exercise::NearestMinimum => "nearest-minimum",
            Exercise::TopWords => "top-words",
            Exercise::RotateList => "rotate-list",
        }
    }
}

/// Literal arguments for one call; `None` stands for an absent argument
#[derive(Debug, Clone)]
pub enum ScenarioInput {
    LongestString {
        allowed: Option<&'static str>,
        candidates: Option<Vec<Option<&'static str>>>,
    },
    FirstUnique {
        items: Option<Vec<Option<&'static str>>>,
    },
    NearestMinimum {
        values: Option<Vec<i64>>,
    },
    TopWords {
        sentence: Option<&'static str>,
    },
    RotateList {
        values: Vec<&'static str>,
        by: i64,
    },
}

impl ScenarioInput {
    pub fn exercise(&self) -> Exercise {
        match self {
            ScenarioInput::LongestString { .. } => Exercise::LongestString,
            ScenarioInput::FirstUnique { .. } => Exercise::FirstUnique,
            ScenarioInput::NearestMinimum { .. } => Exercise::NearestMinimum,
            ScenarioInput::TopWords { .. } => Exercise::TopWords,
            ScenarioInput::RotateList { .. } => Exercise::RotateList,
        }
    }

    /// Runs the exercise and renders its outcome the way the CLI prints it
    pub fn evaluate(&self) -> Result<String> {
        match self {
            ScenarioInput::LongestString {
                allowed,
                candidates,
            } => longest::longest_valid_string(*allowed, candidates.as_deref()).map(str::to_string),
            ScenarioInput::FirstUnique { items } => {
                unique::first_unique(items.as_deref()).map(render_optional)
            }
            ScenarioInput::NearestMinimum { values } => {
                nearest_min::nearest_minimum_distance(values.as_deref())
                    .map(|found| render_optional(found.as_ref()))
            }
            ScenarioInput::TopWords { sentence } => {
                top_words::top_three_words(*sentence).map(|words| render_words(&words))
            }
            ScenarioInput::RotateList { values, by } => {
                let mut list: SinglyLinkedList<&str> = values.iter().copied().collect();
                list.rotate_right(*by)?;
                Ok(list.to_string())
            }
        }
    }
}

/// Renders a "no answer" result as `none`
pub fn render_optional<T: std::fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

/// Renders a word list as `[a, b, c]`
pub fn render_words(words: &[&str]) -> String {
    format!("[{}]", words.join(", "))
}

/// What a scenario must produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Output(&'static str),
    InvalidInput,
}

/// A named call with its expected outcome
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub input: ScenarioInput,
    pub expected: Expected,
}

fn present(values: &[&'static str]) -> Option<Vec<Option<&'static str>>> {
    Some(values.iter().copied().map(Some).collect())
}

lazy_static! {
    /// Worked scenarios, grouped by exercise
    pub static ref SCENARIOS: Vec<Scenario> = vec![
        Scenario {
            name: "longest: worked example",
            input: ScenarioInput::LongestString {
                allowed: Some("ABCD"),
                candidates: present(&["AABCDA", "ABCDZADC", "ABCDBCA", "ABCDABDCA"]),
            },
            expected: Expected::Output("ABCDABDCA"),
        },
        Scenario {
            name: "longest: no candidates",
            input: ScenarioInput::LongestString {
                allowed: Some("ABCD"),
                candidates: present(&[]),
            },
            expected: Expected::Output(""),
        },
        Scenario {
            name: "longest: no valid candidate",
            input: ScenarioInput::LongestString {
                allowed: Some("ABCD"),
                candidates: present(&["ZZZ", "YYY"]),
            },
            expected: Expected::Output(""),
        },
        Scenario {
            name: "longest: single characters",
            input: ScenarioInput::LongestString {
                allowed: Some("ABCD"),
                candidates: present(&["A", "B", "C", "D"]),
            },
            expected: Expected::Output("A"),
        },
        Scenario {
            name: "longest: alternating characters",
            input: ScenarioInput::LongestString {
                allowed: Some("ABCD"),
                candidates: present(&["ABABABAB"]),
            },
            expected: Expected::Output("ABABABAB"),
        },
        Scenario {
            name: "longest: absent allowed characters",
            input: ScenarioInput::LongestString {
                allowed: None,
                candidates: present(&["AB"]),
            },
            expected: Expected::InvalidInput,
        },
        Scenario {
            name: "longest: absent candidates",
            input: ScenarioInput::LongestString {
                allowed: Some("ABCD"),
                candidates: None,
            },
            expected: Expected::InvalidInput,
        },
        Scenario {
            name: "unique: worked example",
            input: ScenarioInput::FirstUnique {
                items: present(&["Apple", "Computer", "Apple", "Bag"]),
            },
            expected: Expected::Output("Computer"),
        },
        Scenario {
            name: "unique: all duplicated",
            input: ScenarioInput::FirstUnique {
                items: present(&["Apple", "Apple", "Bag", "Bag"]),
            },
            expected: Expected::Output("none"),
        },
        Scenario {
            name: "unique: absent entries skipped",
            input: ScenarioInput::FirstUnique {
                items: Some(vec![None, Some("Apple"), None, Some("Bag"), Some("Apple")]),
            },
            expected: Expected::Output("Bag"),
        },
        Scenario {
            name: "unique: empty",
            input: ScenarioInput::FirstUnique { items: present(&[]) },
            expected: Expected::Output("none"),
        },
        Scenario {
            name: "unique: absent items",
            input: ScenarioInput::FirstUnique { items: None },
            expected: Expected::InvalidInput,
        },
        Scenario {
            name: "nearest-min: worked example",
            input: ScenarioInput::NearestMinimum { values: Some(vec![1, 2, 3, 1, 4, 5, 2]) },
            expected: Expected::Output("3"),
        },
        Scenario {
            name: "nearest-min: adjacent minimums",
            input: ScenarioInput::NearestMinimum { values: Some(vec![5, 1, 1, 3, 4]) },
            expected: Expected::Output("1"),
        },
        Scenario {
            name: "nearest-min: minimums at both ends",
            input: ScenarioInput::NearestMinimum { values: Some(vec![1, 5, 3, 4, 1]) },
            expected: Expected::Output("4"),
        },
        Scenario {
            name: "nearest-min: all equal",
            input: ScenarioInput::NearestMinimum { values: Some(vec![2, 2, 2, 2, 2]) },
            expected: Expected::Output("1"),
        },
        Scenario {
            name: "nearest-min: single element",
            input: ScenarioInput::NearestMinimum { values: Some(vec![1]) },
            expected: Expected::Output("none"),
        },
        Scenario {
            name: "nearest-min: absent values",
            input: ScenarioInput::NearestMinimum { values: None },
            expected: Expected::InvalidInput,
        },
        Scenario {
            name: "top-words: worked example",
            input: ScenarioInput::TopWords {
                sentence: Some(
                    "hi there care to discuss algorithm basis or how to solve algorithm or",
                ),
            },
            expected: Expected::Output("[algorithm, or, to]"),
        },
        Scenario {
            name: "top-words: empty sentence",
            input: ScenarioInput::TopWords { sentence: Some("") },
            expected: Expected::Output("[]"),
        },
        Scenario {
            name: "top-words: absent sentence",
            input: ScenarioInput::TopWords { sentence: None },
            expected: Expected::InvalidInput,
        },
        Scenario {
            name: "rotate: worked example",
            input: ScenarioInput::RotateList { values: vec!["A", "B", "C", "D", "E"], by: 2 },
            expected: Expected::Output("D -> E -> A -> B -> C"),
        },
        Scenario {
            name: "rotate: more than the length",
            input: ScenarioInput::RotateList { values: vec!["A", "B", "C", "D", "E"], by: 7 },
            expected: Expected::Output("D -> E -> A -> B -> C"),
        },
        Scenario {
            name: "rotate: single node",
            input: ScenarioInput::RotateList { values: vec!["A"], by: 3 },
            expected: Expected::Output("A"),
        },
        Scenario {
            name: "rotate: absent head",
            input: ScenarioInput::RotateList { values: vec![], by: 1 },
            expected: Expected::InvalidInput,
        },
        Scenario {
            name: "rotate: negative count",
            input: ScenarioInput::RotateList { values: vec!["A", "B"], by: -1 },
            expected: Expected::InvalidInput,
        },
    ];
}

/// Returns the scenarios of one exercise, in table order
pub fn scenarios_for(exercise: Exercise) -> impl Iterator<Item = &'static Scenario> {
    let scenarios: &'static [Scenario] = &SCENARIOS;
    scenarios
        .iter()
        .filter(move |scenario| scenario.input.exercise() == exercise)
}
