//! Static course catalog. Built once at startup, never mutated.

use crate::models::{
    BuildGoal, Course, Level, Module, Point, Question, Step, StepKind, Template, World,
};

fn level(id: &'static str, title: &'static str, kind: StepKind, question: Question) -> Level {
    Level {
        id,
        title,
        steps: vec![Step {
            id: "s1",
            kind,
            questions: vec![question],
        }],
    }
}

fn arithmetic_levels() -> Vec<Level> {
    vec![
        level(
            "ari-l1",
            "Counting Dumplings",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Place 3 dumplings on the plate.",
                Template::Build {
                    grid_size: 6,
                    goal: BuildGoal::Points(3),
                },
                "1 + 1 + 1 = 3. You just counted a quantity!",
            ),
        ),
        level(
            "ari-l2",
            "Teapots and Cups",
            StepKind::Explore,
            Question::choice(
                "q1",
                "One teapot fills 2 cups.",
                vec!["1", "2", "3", "4"],
                1,
                "Each teapot fills 2 cups: 2 + 2 = 4.",
            )
            .with_sub_prompt("How many teapots for 4 cups?"),
        ),
        level(
            "ari-l3",
            "Apples in Rows",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Lay out apples in 3 rows of 4.",
                Template::Build {
                    grid_size: 6,
                    goal: BuildGoal::Points(12),
                },
                "3 x 4 = 12. Multiplication is adding equal rows.",
            ),
        ),
        level(
            "ari-l4",
            "Fair Shares",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Split 12 dumplings among 3 people. Fill one share.",
                Template::Build {
                    grid_size: 6,
                    goal: BuildGoal::Points(4),
                },
                "12 / 3 = 4. Each person gets 4 dumplings.",
            )
            .with_sub_prompt("How many does each person get?"),
        ),
        level(
            "ari-l5",
            "Market Money",
            StepKind::Explore,
            Question::choice(
                "q1",
                "You have 20 coins. A kilo of dumplings costs 4.",
                vec!["4", "5", "6", "8"],
                1,
                "20 divided by 4 is 5, because 5 x 4 = 20.",
            )
            .with_sub_prompt("How many kilos can you buy?"),
        ),
        level(
            "ari-l6",
            "Bread Slices",
            StepKind::Explore,
            Question::choice(
                "q1",
                "You ate 3 slices from an 8-slice loaf.",
                vec!["3", "4", "5", "6"],
                2,
                "8 - 3 = 5. Subtraction takes away from what you have.",
            )
            .with_sub_prompt("How many slices are left?"),
        ),
        level(
            "ari-l7",
            "Half Cups",
            StepKind::Explore,
            Question::choice(
                "q1",
                "Each cup holds 0.5 liters.",
                vec!["1.0 liters", "1.5 liters", "2.0 liters", "2.5 liters"],
                1,
                "0.5 + 0.5 + 0.5 = 1.5. Fractions are parts of a whole.",
            )
            .with_sub_prompt("How much tea is in 3 cups?"),
        ),
        level(
            "ari-l8",
            "Growing Sequence",
            StepKind::Explore,
            Question::choice(
                "q1",
                "Find the pattern: 2, 5, 8, 11, ...",
                vec!["12", "13", "14", "15"],
                2,
                "It grows by 3 each time. 11 + 3 = 14.",
            )
            .with_sub_prompt("Which number comes next?"),
        ),
        level(
            "ari-l9",
            "Packs and Spares",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Two packs of 5 apples plus 3 loose ones (2x5 + 3).",
                Template::Build {
                    grid_size: 6,
                    goal: BuildGoal::Points(13),
                },
                "2 x 5 = 10, and 3 more makes 13.",
            )
            .with_sub_prompt("Place them all on the tray."),
        ),
        level(
            "ari-l10",
            "Speed Round",
            StepKind::Quiz,
            Question::choice(
                "q1",
                "Divide 6 by 2, then add 7.",
                vec!["9", "10", "11", "12"],
                1,
                "6 / 2 = 3, and 3 + 7 = 10. Arithmetic mastered!",
            ),
        ),
    ]
}

fn algebra_levels() -> Vec<Level> {
    vec![
        level(
            "alg-l1",
            "The Mystery Box (x + 2 = 5)",
            StepKind::Explore,
            Question::choice(
                "q1",
                "A box plus 2 apples balances 5 apples.",
                vec!["2", "3", "4", "5"],
                1,
                "If x + 2 = 5, then x = 3. Algebra finds the unknown.",
            )
            .with_sub_prompt("How many apples hide in the box?"),
        ),
        level(
            "alg-l2",
            "Two Boxes (2x = 10)",
            StepKind::Explore,
            Question::choice(
                "q1",
                "Two identical boxes balance 10 coins.",
                vec!["4", "5", "6", "10"],
                1,
                "2x = 10, so one x = 5. Dividing keeps the balance.",
            )
            .with_sub_prompt("How many coins per box?"),
        ),
        level(
            "alg-l3",
            "A Harder Equation",
            StepKind::Explore,
            Question::choice(
                "q1",
                "Two boxes and 1 coin total 7.",
                vec!["2", "3", "4", "5"],
                1,
                "2x + 1 = 7. Subtract 1: 2x = 6. Divide by 2: x = 3.",
            )
            .with_sub_prompt("How many coins in one box?"),
        ),
        level(
            "alg-l4",
            "Growing Pattern",
            StepKind::Explore,
            Question::choice(
                "q1",
                "A tile pattern grows by 2 each step.",
                vec!["10", "15", "20", "25"],
                2,
                "The rule is y = 2x. At step 10, 2 x 10 = 20.",
            )
            .with_sub_prompt("How many tiles at step 10?"),
        ),
        level(
            "alg-l5",
            "Basket Equation",
            StepKind::Explore,
            Question::choice(
                "q1",
                "Three baskets and 3 loose apples make 15.",
                vec!["3", "4", "5", "6"],
                1,
                "3x + 3 = 15, so 3x = 12, so x = 4.",
            )
            .with_sub_prompt("How many apples per basket?"),
        ),
        level(
            "alg-l6",
            "Perimeter with x",
            StepKind::Explore,
            Question::choice(
                "q1",
                "A rectangle has sides x and 5, and perimeter 20.",
                vec!["4", "5", "6", "10"],
                1,
                "2 * (x + 5) = 20, so x + 5 = 10, so x = 5.",
            )
            .with_sub_prompt("What is x?"),
        ),
        level(
            "alg-l7",
            "The Square of x",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Build the square with side x = 4.",
                Template::Build {
                    grid_size: 6,
                    goal: BuildGoal::Points(16),
                },
                "4 x 4 = 16. A square's area is its side squared.",
            )
            .with_sub_prompt("How many cells is x squared?"),
        ),
        level(
            "alg-l8",
            "Finding the Root",
            StepKind::Explore,
            Question::choice(
                "q1",
                "A square has area 25.",
                vec!["3", "4", "5", "6"],
                2,
                "If x squared is 25, x = 5, because 5 * 5 = 25.",
            )
            .with_sub_prompt("How long is its side x?"),
        ),
        level(
            "alg-l9",
            "An Algebraic Pattern",
            StepKind::Explore,
            Question::choice(
                "q1",
                "What is the area of a square with side (x + 2)?",
                vec!["4", "9", "16", "25"],
                1,
                "(1 + 2) squared is 3 squared, which is 9.",
            )
            .with_sub_prompt("Take x = 1."),
        ),
        level(
            "alg-l10",
            "Quadratic Finale",
            StepKind::Quiz,
            Question::choice(
                "q1",
                "For x * (x + 3) = 18,",
                vec!["2", "3", "4", "5"],
                1,
                "3 * (3 + 3) = 3 * 6 = 18. Congratulations, algebra master!",
            )
            .with_sub_prompt("which x works?"),
        ),
    ]
}

fn geometry_levels() -> Vec<Level> {
    vec![
        level(
            "geo-l1",
            "The Symmetry Mirror",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Reflect the pattern to the right side.",
                Template::Mirror {
                    grid_size: 6,
                    source_points: vec![Point::new(0, 1), Point::new(1, 2), Point::new(2, 1)],
                },
                "Symmetry means an object equals its mirror image.",
            )
            .with_sub_prompt("Mind the mirror line."),
        ),
        level(
            "geo-l2",
            "Symmetric Turns",
            StepKind::Explore,
            Question::choice(
                "q1",
                "Rotate the shape 180 degrees.",
                vec!["Yes", "No"],
                0,
                "Some shapes look identical after a half turn. That is rotational symmetry.",
            )
            .with_sub_prompt("Does it return to its own outline?")
            .with_template(Template::Rotate { target_rotation: 180 }),
        ),
        level(
            "geo-l3",
            "Slide to Fit",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Slide the shape onto its shadow.",
                Template::Match {
                    grid_size: 8,
                    target_offset: Point::new(2, -2),
                },
                "A translation moves a shape without changing it.",
            ),
        ),
        level(
            "geo-l4",
            "Perimeter Builder",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Build a shape with perimeter 12.",
                Template::Build {
                    grid_size: 8,
                    goal: BuildGoal::Perimeter(12.0),
                },
                "Perimeter is the sum of all the sides around a shape.",
            )
            .with_sub_prompt("Pick the cells one by one."),
        ),
        level(
            "geo-l5",
            "Secrets of Area",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Build a square with area 9.",
                Template::Build {
                    grid_size: 8,
                    goal: BuildGoal::Area(9.0),
                },
                "Area is the number of unit squares inside a shape.",
            ),
        ),
        level(
            "geo-l6",
            "The Right Angle",
            StepKind::Explore,
            Question::choice(
                "q1",
                "Rotate the shape 90 degrees.",
                vec!["Acute", "Right", "Obtuse", "Straight"],
                1,
                "90 degrees is a right angle.",
            )
            .with_sub_prompt("What is this angle called?")
            .with_template(Template::Rotate { target_rotation: 90 }),
        ),
        level(
            "geo-l7",
            "Triangle Symmetry",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Complete the right half of the triangle.",
                Template::Mirror {
                    grid_size: 6,
                    source_points: vec![Point::new(2, 0), Point::new(1, 2), Point::new(2, 4)],
                },
                "An isosceles triangle has one axis of symmetry.",
            ),
        ),
        level(
            "geo-l8",
            "Moving Shapes",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Slide the shape to the lower corner.",
                Template::Match {
                    grid_size: 8,
                    target_offset: Point::new(3, 3),
                },
                "Moving a shape never changes its area.",
            ),
        ),
        level(
            "geo-l9",
            "A Trickier Perimeter",
            StepKind::Explore,
            Question::discovery(
                "q1",
                "Build a shape with perimeter 10.",
                Template::Build {
                    grid_size: 8,
                    goal: BuildGoal::Perimeter(10.0),
                },
                "However complex the shape, we can still walk its border.",
            ),
        ),
        level(
            "geo-l10",
            "Pattern Finale",
            StepKind::Quiz,
            Question::discovery(
                "q1",
                "Complete the symmetric pattern.",
                Template::Mirror {
                    grid_size: 6,
                    source_points: vec![Point::new(0, 0), Point::new(2, 2), Point::new(0, 5)],
                },
                "Nature and architecture are built on symmetry.",
            ),
        ),
    ]
}

/// The full catalog: three playable courses and one announced-only course.
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "arithmetic",
            title: "Arithmetic",
            description: "Discover counting and calculation.",
            icon: "+",
            coming_soon: false,
            worlds: vec![World {
                id: "math-foundation",
                title: "Foundations",
                icon: "#",
                modules: vec![Module {
                    id: "ari-mod-1",
                    title: "Counting",
                    levels: arithmetic_levels(),
                }],
            }],
        },
        Course {
            id: "algebra",
            title: "Algebra",
            description: "Mystery boxes and logic.",
            icon: "x",
            coming_soon: false,
            worlds: vec![World {
                id: "algebra-logic",
                title: "World of Logic",
                icon: "?",
                modules: vec![Module {
                    id: "alg-mod-1",
                    title: "Equations",
                    levels: algebra_levels(),
                }],
            }],
        },
        Course {
            id: "geometry",
            title: "Geometry",
            description: "Understand patterns and space.",
            icon: "△",
            coming_soon: false,
            worlds: vec![World {
                id: "geometry-space",
                title: "World of Space",
                icon: "◻",
                modules: vec![Module {
                    id: "geo-mod-1",
                    title: "Shapes",
                    levels: geometry_levels(),
                }],
            }],
        },
        Course {
            id: "cs",
            title: "Programming",
            description: "The secret of algorithms.",
            icon: "%",
            coming_soon: true,
            worlds: vec![],
        },
    ]
}
