use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory holding a guide collection file, mirroring the
/// `data/commands.json` layout the binary reads.
pub struct TempCollection {
    dir: TempDir,
}

impl TempCollection {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Writes `contents` as the collection file and returns its path.
    pub fn write_commands_json(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("commands.json");
        fs::write(&path, contents).expect("write commands.json");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A small collection in the shape the live site serves: two categories,
/// webnames, descriptions, and guides with the optional field spread.
pub const SAMPLE_COLLECTION: &str = r#"[
    {
        "name": "guides-pvp-builds",
        "webname": "pvp",
        "description": "Player versus player build guides",
        "guides": [
            {
                "name": "Juggernaut Opening",
                "fams": ["Ironclad Golem"],
                "builds": ["Tanky"],
                "attachments": [
                    {"attachmenttype": "file", "filename": "juggernaut.png", "contenttype": "image/png"}
                ]
            },
            {
                "name": "Glass Cannon Rush",
                "obsolete": "Nerfed in patch 2.1, see Juggernaut Opening.",
                "builds": ["Burst"]
            }
        ]
    },
    {
        "name": "guides-dungeons",
        "description": "Dungeon clearing routes",
        "guides": [
            {
                "name": "Catacombs Speedrun",
                "fams": ["Ironclad Golem", "Spark Imp"],
                "attachments": [
                    {"attachmenttype": "markdown", "filename": "catacombs.md"},
                    {"attachmenttype": "link", "link": "https://example.com/catacombs-map"}
                ],
                "difficulty": {"tier": 4, "notes": "bring cleanse"}
            }
        ]
    }
]"#;
