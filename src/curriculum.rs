//! The fixed 21-day Python learning curriculum. Compiled in, read-only.

use serde::Serialize;

pub const DAYS_TOTAL: u8 = 21;
pub const WEEKS_TOTAL: u8 = 3;
pub const DAYS_PER_WEEK: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurriculumDay {
    pub day: u8,
    pub week: u8,
    pub week_title: &'static str,
    pub topic: &'static str,
    pub practice: &'static str,
    pub resources: &'static [&'static str],
}

const WEEK_TITLES: [&str; 3] = [
    "Python Basics",
    "Intermediate Python",
    "Advanced & Final Project",
];

const DAYS: [CurriculumDay; 21] = [
    CurriculumDay {
        day: 1,
        week: 1,
        week_title: WEEK_TITLES[0],
        topic: "Variables & Data Types",
        practice: "Write a script to store and print your name, age, and favorite number.",
        resources: &["W3Schools", "Mosh's Video"],
    },
    CurriculumDay {
        day: 2,
        week: 1,
        week_title: WEEK_TITLES[0],
        topic: "Operators & Expressions",
        practice: "Write a calculator that adds, subtracts, multiplies, and divides two numbers.",
        resources: &["Programiz", "Corey Schafer's Video"],
    },
    CurriculumDay {
        day: 3,
        week: 1,
        week_title: WEEK_TITLES[0],
        topic: "If Statements & Conditions",
        practice: "Create a program that checks if a number is positive, negative, or zero.",
        resources: &["Real Python", "freeCodeCamp Video"],
    },
    CurriculumDay {
        day: 4,
        week: 1,
        week_title: WEEK_TITLES[0],
        topic: "Loops (for, while)",
        practice: "Print numbers from 1-10 using a loop. Print even numbers only.",
        resources: &["W3Schools Loops", "CS Dojo Video"],
    },
    CurriculumDay {
        day: 5,
        week: 1,
        week_title: WEEK_TITLES[0],
        topic: "Functions",
        practice: "Write a function that takes a number and returns its square.",
        resources: &["Python Functions (Programiz)", "Mosh's Video"],
    },
    CurriculumDay {
        day: 6,
        week: 1,
        week_title: WEEK_TITLES[0],
        topic: "Lists & Strings",
        practice: "Reverse a string and find the largest number in a list.",
        resources: &["W3Schools Lists", "Corey Schafer's Video"],
    },
    CurriculumDay {
        day: 7,
        week: 1,
        week_title: WEEK_TITLES[0],
        topic: "Mini Project (Basics)",
        practice: "Build a basic calculator or a number guessing game.",
        resources: &["Use Replit to code"],
    },
    CurriculumDay {
        day: 8,
        week: 2,
        week_title: WEEK_TITLES[1],
        topic: "Dictionaries & Sets",
        practice: "Count word frequency in a sentence using a dictionary.",
        resources: &["W3Schools Dictionaries", "Corey Schafer Video"],
    },
    CurriculumDay {
        day: 9,
        week: 2,
        week_title: WEEK_TITLES[1],
        topic: "File Handling",
        practice: "Read a file and count how many lines it has.",
        resources: &["Programiz", "Mosh's Video"],
    },
    CurriculumDay {
        day: 10,
        week: 2,
        week_title: WEEK_TITLES[1],
        topic: "Error Handling (try-except)",
        practice: "Create a program that handles division by zero errors.",
        resources: &["Real Python", "freeCodeCamp Video"],
    },
    CurriculumDay {
        day: 11,
        week: 2,
        week_title: WEEK_TITLES[1],
        topic: "Modules (math, random)",
        practice: "Generate a random password using random module.",
        resources: &["Python Modules Guide", "Mosh's Video"],
    },
    CurriculumDay {
        day: 12,
        week: 2,
        week_title: WEEK_TITLES[1],
        topic: "OOP Basics (Classes & Objects)",
        practice: "Create a Car class with attributes like brand and speed.",
        resources: &["Real Python", "Mosh's Video"],
    },
    CurriculumDay {
        day: 13,
        week: 2,
        week_title: WEEK_TITLES[1],
        topic: "APIs & JSON",
        practice: "Fetch weather data from an API and display it.",
        resources: &["Requests Library (Real Python)", "Corey Schafer Video"],
    },
    CurriculumDay {
        day: 14,
        week: 2,
        week_title: WEEK_TITLES[1],
        topic: "Mini Project",
        practice: "Build a To-Do List App or Weather App using API.",
        resources: &["Use Replit or Jupyter Notebook"],
    },
    CurriculumDay {
        day: 15,
        week: 3,
        week_title: WEEK_TITLES[2],
        topic: "Recap & Debugging",
        practice: "Debug old programs and improve efficiency.",
        resources: &["Use Pythontutor to visualize code execution"],
    },
    CurriculumDay {
        day: 16,
        week: 3,
        week_title: WEEK_TITLES[2],
        topic: "Data Structures (Stacks, Queues)",
        practice: "Implement a simple stack and queue in Python.",
        resources: &["Real Python"],
    },
    CurriculumDay {
        day: 17,
        week: 3,
        week_title: WEEK_TITLES[2],
        topic: "Algorithms (Sorting & Searching)",
        practice: "Implement Bubble Sort and Binary Search.",
        resources: &["Khan Academy"],
    },
    CurriculumDay {
        day: 18,
        week: 3,
        week_title: WEEK_TITLES[2],
        topic: "Python Libraries (pandas, matplotlib)",
        practice: "Read a CSV file using Pandas and create a basic graph.",
        resources: &["Pandas Docs", "Matplotlib Tutorial"],
    },
    CurriculumDay {
        day: 19,
        week: 3,
        week_title: WEEK_TITLES[2],
        topic: "Final Project Brainstorming",
        practice: "Plan a final project (Choose from ideas below).",
        resources: &["Use Google Colab"],
    },
    CurriculumDay {
        day: 20,
        week: 3,
        week_title: WEEK_TITLES[2],
        topic: "Final Project (Day 1)",
        practice: "Build a project like: Password Manager, Budget Tracker, or Simple Game.",
        resources: &["Use Replit or Jupyter Notebook"],
    },
    CurriculumDay {
        day: 21,
        week: 3,
        week_title: WEEK_TITLES[2],
        topic: "Final Project (Day 2)",
        practice: "Complete your final project and showcase it.",
        resources: &["Use Replit or Jupyter Notebook"],
    },
];

/// All 21 days in day order.
pub fn all_days() -> &'static [CurriculumDay] {
    &DAYS
}

/// Look up a single day. Returns None outside 1..=21.
pub fn day(number: u8) -> Option<&'static CurriculumDay> {
    if (1..=DAYS_TOTAL).contains(&number) {
        Some(&DAYS[(number - 1) as usize])
    } else {
        None
    }
}

pub fn week_title(week: u8) -> Option<&'static str> {
    if (1..=WEEKS_TOTAL).contains(&week) {
        Some(WEEK_TITLES[(week - 1) as usize])
    } else {
        None
    }
}

/// The seven days of a week, or an empty slice outside 1..=3.
pub fn days_in_week(week: u8) -> &'static [CurriculumDay] {
    if (1..=WEEKS_TOTAL).contains(&week) {
        let start = ((week - 1) * DAYS_PER_WEEK) as usize;
        &DAYS[start..start + DAYS_PER_WEEK as usize]
    } else {
        &[]
    }
}

/// Up to `count` days starting at `from_day`, for "coming up next" panels.
pub fn upcoming(from_day: u8, count: usize) -> &'static [CurriculumDay] {
    if from_day < 1 || from_day > DAYS_TOTAL {
        return &[];
    }
    let start = (from_day - 1) as usize;
    let end = (start + count).min(DAYS.len());
    &DAYS[start..end]
}

/// Tools recommended alongside the curriculum.
pub fn additional_tools() -> &'static [&'static str] {
    &[
        "Online Coding Editors: Replit, Jupyter Notebook, Google Colab",
        "Practice & Challenges: HackerRank, LeetCode",
        "Debugging & Visualization: Python Tutor",
    ]
}
