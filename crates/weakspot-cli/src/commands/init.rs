//! The `weakspot init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create weakspot.toml
    if std::path::Path::new("weakspot.toml").exists() {
        println!("weakspot.toml already exists, skipping.");
    } else {
        std::fs::write("weakspot.toml", SAMPLE_CONFIG)?;
        println!("Created weakspot.toml");
    }

    // Create example lesson
    std::fs::create_dir_all("content")?;
    let example_path = std::path::Path::new("content/example-lesson.json");
    if example_path.exists() {
        println!("content/example-lesson.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_LESSON)?;
        println!("Created content/example-lesson.json");
    }

    println!("\nNext steps:");
    println!("  1. Drop your lesson JSON files into content/");
    println!("  2. Run: weakspot validate");
    println!("  3. Run: weakspot mark D1-LESSON-001-0-0 review");
    println!("  4. Run: weakspot review");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# weakspot configuration

# Directory of lesson JSON files
content_dir = "./content"

# Directory where tracking state is persisted
state_dir = "./.weakspot"
"#;

const EXAMPLE_LESSON: &str = r#"{
    "id": "D1-LESSON-001",
    "title": "Security Controls Fundamentals",
    "domain": 1,
    "sections": [
        {
            "title": "Control Categories",
            "memory_hooks": {
                "mnemonic": "My Office Prevents Trouble: Managerial, Operational, Physical, Technical",
                "analogy": "Controls are like the layers of protection on a house: policies are the house rules, alarms are detective, locks are preventive.",
                "common_mistakes": [
                    {
                        "mistake": "Deterrent and preventive controls are the same thing",
                        "why_wrong": "A deterrent only discourages an attacker; it does not stop an attempt that proceeds anyway.",
                        "correct": "A warning sign deters; a locked door prevents. Classify by what happens when the attacker ignores it."
                    },
                    {
                        "mistake": "Compensating controls are a sign of weak security",
                        "why_wrong": "Compensating controls are a planned, accepted substitute when the primary control is not feasible.",
                        "correct": "They are a normal part of control selection, documented alongside the requirement they stand in for."
                    },
                    {
                        "mistake": "Technical controls are always software",
                        "why_wrong": "Technical controls are implemented by systems, which includes hardware like firewalls and smart card readers.",
                        "correct": "Technical means enforced by a system rather than by people or processes, whatever the form factor."
                    }
                ]
            }
        }
    ]
}
"#;
