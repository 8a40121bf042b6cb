//! Virtual barista: quiz-based product recommendation.
//!
//! Four fixed single-select questions feed additive scores over the five
//! eligible products; the brew-method answer independently fixes the
//! recommended grind. Scoring is deterministic - same answers, same
//! recommendation - and ties resolve to the earliest candidate in
//! [`CANDIDATES`] order, so the order of that table is part of the contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use terrazul_core::{Grind, ProductId};

/// Eligible products in canonical order. This order is the tie-break: the
/// first candidate to reach the top score wins.
pub const CANDIDATES: [&str; 5] = [
    "kantutani-bolivia",
    "pack-tres-origenes",
    "huehuetenango-guatemala",
    "huila-colombia",
    "minas-gerais-brasil",
];

// Indices into the score vector, in CANDIDATES order.
const KANTUTANI: usize = 0;
const PACK_TRES: usize = 1;
const HUEHUETENANGO: usize = 2;
const HUILA: usize = 3;
const MINAS_GERAIS: usize = 4;

/// Answer to "¿Qué tipo de sabores prefieres en tu café?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlavorPreference {
    Fruity,
    Chocolate,
    Nutty,
    Spicy,
}

/// Answer to "¿Qué tanta intensidad buscas?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityPreference {
    Mild,
    Medium,
    Strong,
}

/// Answer to "¿Qué nivel de amargor disfrutas o toleras?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitternessTolerance {
    Low,
    Medium,
    High,
}

/// Answer to "¿Cómo preparas tu café normalmente?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrewMethod {
    Espresso,
    Filter,
    FrenchPress,
    WholeBean,
}

impl BrewMethod {
    /// The grind that suits this preparation.
    #[must_use]
    pub const fn grind(self) -> Grind {
        match self {
            Self::Espresso => Grind::Fine,
            Self::Filter => Grind::Medium,
            Self::FrenchPress => Grind::Coarse,
            Self::WholeBean => Grind::WholeBean,
        }
    }
}

/// A completed (or partially completed) questionnaire.
///
/// The popup flow fills one answer per step; any question left unanswered
/// simply contributes nothing to the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuizAnswers {
    pub flavor: Option<FlavorPreference>,
    pub intensity: Option<IntensityPreference>,
    pub bitterness: Option<BitternessTolerance>,
    pub brew_method: Option<BrewMethod>,
}

/// Error recording an answer by question number and option token.
#[derive(Debug, Clone, Error)]
pub enum AnswerError {
    #[error("no question {0}")]
    UnknownQuestion(u8),
    #[error("unknown option '{token}' for question {question}")]
    UnknownOption { question: u8, token: String },
}

impl QuizAnswers {
    /// Record the option `token` for 1-based `question`, as the popup does
    /// while stepping through the flow.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` when the question number or token is unknown;
    /// previously recorded answers are untouched.
    pub fn set(&mut self, question: u8, token: &str) -> Result<(), AnswerError> {
        match (question, token) {
            (1, "fruity") => self.flavor = Some(FlavorPreference::Fruity),
            (1, "chocolate") => self.flavor = Some(FlavorPreference::Chocolate),
            (1, "nutty") => self.flavor = Some(FlavorPreference::Nutty),
            (1, "spicy") => self.flavor = Some(FlavorPreference::Spicy),
            (2, "mild") => self.intensity = Some(IntensityPreference::Mild),
            (2, "medium") => self.intensity = Some(IntensityPreference::Medium),
            (2, "strong") => self.intensity = Some(IntensityPreference::Strong),
            (3, "low") => self.bitterness = Some(BitternessTolerance::Low),
            (3, "medium") => self.bitterness = Some(BitternessTolerance::Medium),
            (3, "high") => self.bitterness = Some(BitternessTolerance::High),
            (4, "espresso") => self.brew_method = Some(BrewMethod::Espresso),
            (4, "filter") => self.brew_method = Some(BrewMethod::Filter),
            (4, "french_press") => self.brew_method = Some(BrewMethod::FrenchPress),
            (4, "whole_bean") => self.brew_method = Some(BrewMethod::WholeBean),
            (q @ 1..=4, t) => {
                return Err(AnswerError::UnknownOption {
                    question: q,
                    token: t.to_owned(),
                });
            }
            (q, _) => return Err(AnswerError::UnknownQuestion(q)),
        }
        Ok(())
    }
}

/// One quiz question with its selectable options, for the popup UI.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [QuestionOption],
}

/// A selectable option: display label plus the token recorded as the answer.
#[derive(Debug, Clone, Copy)]
pub struct QuestionOption {
    pub label: &'static str,
    pub token: &'static str,
}

/// The fixed questionnaire, in presentation order.
pub const QUESTIONS: [Question; 4] = [
    Question {
        text: "¿Qué tipo de sabores prefieres en tu café?",
        options: &[
            QuestionOption {
                label: "Frutales / brillantes",
                token: "fruity",
            },
            QuestionOption {
                label: "Achocolatados / dulces",
                token: "chocolate",
            },
            QuestionOption {
                label: "Nueces / caramelo",
                token: "nutty",
            },
            QuestionOption {
                label: "Especiados / complejos",
                token: "spicy",
            },
        ],
    },
    Question {
        text: "¿Qué tanta intensidad buscas?",
        options: &[
            QuestionOption {
                label: "Suave",
                token: "mild",
            },
            QuestionOption {
                label: "Media",
                token: "medium",
            },
            QuestionOption {
                label: "Alta",
                token: "strong",
            },
        ],
    },
    Question {
        text: "¿Qué nivel de amargor disfrutas o toleras?",
        options: &[
            QuestionOption {
                label: "Bajo",
                token: "low",
            },
            QuestionOption {
                label: "Medio",
                token: "medium",
            },
            QuestionOption {
                label: "Alto",
                token: "high",
            },
        ],
    },
    Question {
        text: "¿Cómo preparas tu café normalmente?",
        options: &[
            QuestionOption {
                label: "Uso máquina espresso",
                token: "espresso",
            },
            QuestionOption {
                label: "Uso cafetera de filtro",
                token: "filter",
            },
            QuestionOption {
                label: "Uso prensa francesa",
                token: "french_press",
            },
            QuestionOption {
                label: "Lo compro en grano para moler en casa",
                token: "whole_bean",
            },
        ],
    },
];

/// Quiz output: a product to suggest and how to grind it.
///
/// The caller resolves the product id against the live catalog; a stale id
/// just means nothing is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: ProductId,
    pub grind: Grind,
}

/// Score the answers and pick the winning product and grind.
///
/// Always returns a recommendation: with no answers at all, every score is
/// zero and the tie-break hands the win to the first candidate.
#[must_use]
pub fn recommend(answers: &QuizAnswers) -> Recommendation {
    let mut scores = [0_u32; CANDIDATES.len()];

    if let Some(flavor) = answers.flavor {
        match flavor {
            FlavorPreference::Fruity => {
                scores[HUEHUETENANGO] += 3;
                scores[HUILA] += 1;
            }
            FlavorPreference::Chocolate => {
                scores[MINAS_GERAIS] += 2;
                scores[KANTUTANI] += 2;
                scores[HUILA] += 1;
            }
            FlavorPreference::Nutty => {
                scores[KANTUTANI] += 3;
                scores[HUILA] += 2;
                scores[MINAS_GERAIS] += 1;
            }
            FlavorPreference::Spicy => {
                scores[PACK_TRES] += 3;
                scores[HUEHUETENANGO] += 1;
            }
        }
    }

    if let Some(intensity) = answers.intensity {
        match intensity {
            IntensityPreference::Mild => {
                scores[KANTUTANI] += 2;
                scores[HUEHUETENANGO] += 2;
            }
            IntensityPreference::Medium => {
                scores[HUILA] += 2;
                scores[PACK_TRES] += 2;
                scores[KANTUTANI] += 1;
                scores[MINAS_GERAIS] += 1;
            }
            IntensityPreference::Strong => {
                // Perceived strength.
                scores[MINAS_GERAIS] += 2;
                scores[HUILA] += 1;
            }
        }
    }

    if let Some(bitterness) = answers.bitterness {
        match bitterness {
            BitternessTolerance::Low => {
                scores[KANTUTANI] += 2;
                scores[HUEHUETENANGO] += 2;
            }
            BitternessTolerance::Medium => {
                scores[PACK_TRES] += 2;
                scores[HUILA] += 2;
            }
            BitternessTolerance::High => {
                scores[MINAS_GERAIS] += 3;
            }
        }
    }

    if let Some(brew_method) = answers.brew_method {
        match brew_method {
            BrewMethod::Espresso => {
                scores[MINAS_GERAIS] += 2;
                scores[PACK_TRES] += 1;
            }
            BrewMethod::Filter => {
                scores[HUEHUETENANGO] += 2;
                scores[KANTUTANI] += 2;
                scores[HUILA] += 1;
            }
            BrewMethod::FrenchPress => {
                scores[HUILA] += 2;
                scores[MINAS_GERAIS] += 1;
            }
            BrewMethod::WholeBean => {
                scores[PACK_TRES] += 3;
            }
        }
    }

    // First strictly-greater score wins, so earlier candidates take ties.
    let mut winner = CANDIDATES[0];
    let mut best: i64 = -1;
    for (id, score) in CANDIDATES.into_iter().zip(scores) {
        if i64::from(score) > best {
            best = i64::from(score);
            winner = id;
        }
    }

    Recommendation {
        product_id: ProductId::new(winner),
        grind: answers.brew_method.map_or(Grind::WholeBean, BrewMethod::grind),
    }
}
