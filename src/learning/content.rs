//! Module identities and their hand-authored content.

use std::fmt;

use crate::learning::quiz::QuizQuestion;

/// Number of content sections in every module.
pub const SECTIONS_PER_MODULE: usize = 4;

/// The four training modules, in course order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleId {
    /// Fundamentals of electrical safety
    Introduction,
    /// Common electrical hazards
    Hazards,
    /// Panel assembly practice
    Assembly,
    /// Inspection and maintenance
    Maintenance,
}

impl ModuleId {
    /// All modules, in course order.
    pub const ALL: [Self; 4] = [
        Self::Introduction,
        Self::Hazards,
        Self::Assembly,
        Self::Maintenance,
    ];

    /// Stable string key, used in the progress store.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::Hazards => "hazards",
            Self::Assembly => "assembly",
            Self::Maintenance => "maintenance",
        }
    }

    /// Human-readable module title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction to Electrical Safety",
            Self::Hazards => "Electrical Hazards",
            Self::Assembly => "Panel Assembly",
            Self::Maintenance => "Inspection & Maintenance",
        }
    }

    /// Parses a stable string key back into a module id.
    #[must_use]
    pub fn parse_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|module| module.key() == key)
    }

    /// The module that follows this one in course order, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        let index = Self::ALL.iter().position(|m| *m == self)?;
        Self::ALL.get(index + 1).copied()
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One page of module content.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Section heading
    pub title: &'static str,
    /// Body text, pre-wrapped by the renderer
    pub body: &'static str,
}

/// A module's full content: sections plus the closing quiz.
#[derive(Debug, Clone)]
pub struct LearningModule {
    /// Which module this is
    pub id: ModuleId,
    /// The four content sections, in reading order
    pub sections: [Section; SECTIONS_PER_MODULE],
    /// The three-question quiz shown after the last section
    pub quiz: [QuizQuestion; 3],
}

impl LearningModule {
    /// Loads the content for the given module.
    #[must_use]
    pub fn load(id: ModuleId) -> Self {
        match id {
            ModuleId::Introduction => introduction(),
            ModuleId::Hazards => hazards(),
            ModuleId::Assembly => assembly(),
            ModuleId::Maintenance => maintenance(),
        }
    }
}

fn introduction() -> LearningModule {
    LearningModule {
        id: ModuleId::Introduction,
        sections: [
            Section {
                title: "Why electrical safety matters",
                body: "Electricity is invisible, silent, and fast. Most electrical \
                       accidents happen not because people take wild risks, but because \
                       they assume a circuit is dead when it is not. This course builds \
                       the habit of verifying before touching.",
            },
            Section {
                title: "How current affects the body",
                body: "As little as 10 mA through the chest can prevent you from letting \
                       go of a conductor; 50 mA can disrupt the heart's rhythm. The damage \
                       depends on the current path, its duration, and the skin's \
                       resistance, which drops sharply when wet.",
            },
            Section {
                title: "Protective devices",
                body: "Circuit breakers protect wiring from overcurrent; residual-current \
                       devices protect people by tripping when current leaks to earth. A \
                       correctly assembled panel uses both: breakers on every circuit and \
                       a residual device guarding the circuits that feed wet areas.",
            },
            Section {
                title: "The golden rules",
                body: "De-energize before working. Verify with a tester, not by touch. \
                       Use insulated tools. Never bypass a protective device. If you are \
                       not qualified for a task, stop and hand it to someone who is.",
            },
        ],
        quiz: [
            QuizQuestion {
                prompt: "What does a residual-current device protect?",
                choices: [
                    "The wiring, from overheating",
                    "People, by tripping on earth-leakage current",
                    "Appliances, from voltage spikes",
                ],
                answer_index: 1,
            },
            QuizQuestion {
                prompt: "Before touching a conductor you should:",
                choices: [
                    "Tap it quickly to see if it bites",
                    "Assume it is dead if the lamp is off",
                    "Verify it is de-energized with a tester",
                ],
                answer_index: 2,
            },
            QuizQuestion {
                prompt: "Skin resistance to current:",
                choices: [
                    "Drops sharply when the skin is wet",
                    "Is constant regardless of conditions",
                    "Increases when the skin is wet",
                ],
                answer_index: 0,
            },
        ],
    }
}

fn hazards() -> LearningModule {
    LearningModule {
        id: ModuleId::Hazards,
        sections: [
            Section {
                title: "Shock and electrocution",
                body: "Direct contact with a live part, or indirect contact through a \
                       faulty appliance chassis, drives current through the body. The \
                       residual device is the last line of defense when insulation fails.",
            },
            Section {
                title: "Arc flash",
                body: "A short circuit across exposed terminals can vaporize metal and \
                       release a pressure wave. Never work on an energized panel; keep \
                       covers on and torque terminals to specification.",
            },
            Section {
                title: "Fire from overload",
                body: "Conductors sized for 10 A will overheat at 20 A long before a \
                       wrongly-rated breaker trips. Breaker rating must match conductor \
                       capacity, never the appetite of the connected loads.",
            },
            Section {
                title: "Damaged insulation",
                body: "Cracked sheathing, pinched cables, and rodent damage expose \
                       conductors years after installation. Periodic visual inspection \
                       catches most failures before they become contact hazards.",
            },
        ],
        quiz: [
            QuizQuestion {
                prompt: "A breaker's rating must match:",
                choices: [
                    "The total wattage of connected loads",
                    "The conductor's current-carrying capacity",
                    "The largest appliance on the circuit",
                ],
                answer_index: 1,
            },
            QuizQuestion {
                prompt: "Arc flash risk is highest when:",
                choices: [
                    "Working on an energized panel",
                    "A circuit is switched off",
                    "Using a multimeter on a battery",
                ],
                answer_index: 0,
            },
            QuizQuestion {
                prompt: "Indirect contact means touching:",
                choices: [
                    "A live busbar directly",
                    "Two phases at once",
                    "A normally-safe surface made live by an insulation fault",
                ],
                answer_index: 2,
            },
        ],
    }
}

fn assembly() -> LearningModule {
    LearningModule {
        id: ModuleId::Assembly,
        sections: [
            Section {
                title: "Panel anatomy",
                body: "Supply enters at the main protective device, splits into circuits \
                       each guarded by its own breaker or residual device, and feeds the \
                       outputs: outlets, lighting, and fixed appliances.",
            },
            Section {
                title: "Choosing the main device",
                body: "The main slot takes the device that protects the whole \
                       installation. Simple panels use a main breaker; installations \
                       with whole-panel shock protection put a residual device first.",
            },
            Section {
                title: "Circuit protection",
                body: "Each distribution circuit gets its own device. Wet-area circuits \
                       (bathroom, kitchen, outdoors) require residual protection; dry \
                       lighting circuits typically use plain breakers.",
            },
            Section {
                title: "Wiring colors",
                body: "Phase conductors are red (or brown), neutral is blue, earth is \
                       green. Consistent colors are not decoration: they are what lets \
                       the next electrician trust the panel.",
            },
        ],
        quiz: [
            QuizQuestion {
                prompt: "In the panel, supply enters at:",
                choices: [
                    "The main protective device",
                    "Any free output slot",
                    "The earth bar",
                ],
                answer_index: 0,
            },
            QuizQuestion {
                prompt: "Wet-area circuits require:",
                choices: [
                    "A larger breaker",
                    "Residual-current protection",
                    "No special protection",
                ],
                answer_index: 1,
            },
            QuizQuestion {
                prompt: "The earth conductor is conventionally:",
                choices: ["Blue", "Red", "Green"],
                answer_index: 2,
            },
        ],
    }
}

fn maintenance() -> LearningModule {
    LearningModule {
        id: ModuleId::Maintenance,
        sections: [
            Section {
                title: "Test buttons exist to be pressed",
                body: "Every residual device has a test button that simulates a leakage \
                       fault. Press it monthly; a device that does not trip on test will \
                       not trip on a real fault either.",
            },
            Section {
                title: "Thermal inspection",
                body: "Loose terminals heat up under load. Discolored insulation, a warm \
                       breaker face, or a faint burnt smell near the panel all mean the \
                       same thing: de-energize and re-torque.",
            },
            Section {
                title: "When a breaker trips",
                body: "A trip is information, not an inconvenience. Find the cause before \
                       resetting: an overloaded circuit, a failing appliance, or moisture \
                       in a fitting. Repeated resets into a fault destroy the breaker.",
            },
            Section {
                title: "Keeping records",
                body: "Label every circuit, date every inspection, and note every device \
                       replacement. A documented panel is serviced in minutes; an \
                       unlabeled one is serviced by trial and error, live.",
            },
        ],
        quiz: [
            QuizQuestion {
                prompt: "The residual device's test button should be pressed:",
                choices: ["Never, it wears the device", "Monthly", "Only after a fault"],
                answer_index: 1,
            },
            QuizQuestion {
                prompt: "A breaker that trips repeatedly should be:",
                choices: [
                    "Investigated for the underlying fault",
                    "Reset until it holds",
                    "Replaced with a higher-rated one",
                ],
                answer_index: 0,
            },
            QuizQuestion {
                prompt: "A warm breaker face usually indicates:",
                choices: [
                    "Normal operation",
                    "A cold room",
                    "A loose, heating terminal",
                ],
                answer_index: 2,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_keys_round_trip() {
        for id in ModuleId::ALL {
            assert_eq!(ModuleId::parse_key(id.key()), Some(id));
        }
        assert_eq!(ModuleId::parse_key("advanced"), None);
    }

    #[test]
    fn course_order_chains_through_next() {
        assert_eq!(ModuleId::Introduction.next(), Some(ModuleId::Hazards));
        assert_eq!(ModuleId::Hazards.next(), Some(ModuleId::Assembly));
        assert_eq!(ModuleId::Assembly.next(), Some(ModuleId::Maintenance));
        assert_eq!(ModuleId::Maintenance.next(), None);
    }

    #[test]
    fn every_quiz_answer_index_is_in_range() {
        for id in ModuleId::ALL {
            let module = LearningModule::load(id);
            for question in &module.quiz {
                assert!(question.answer_index < question.choices.len());
            }
        }
    }
}
