// tests/common/mod.rs
//! Fixture tables written to a temp dir.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wikigraph_core::TablePaths;

pub struct Fixture {
    pub dir: TempDir,
    pub tables: TablePaths,
}

impl Fixture {
    /// `texts` is a list of (file name relative to the text dir, JSON lines).
    pub fn new(pages: &str, categories: &str, redirects: &str, links: &str, texts: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let tables = TablePaths {
            page: root.join("page.csv"),
            categories: root.join("page2cat.tsv"),
            pagelinks: root.join("pagelinks.csv"),
            redirect: root.join("redirect.csv"),
            text_dir: root.join("text"),
        };
        fs::write(&tables.page, pages).unwrap();
        fs::write(&tables.categories, categories).unwrap();
        fs::write(&tables.redirect, redirects).unwrap();
        fs::write(&tables.pagelinks, links).unwrap();
        for (name, content) in texts {
            write_file(&tables.text_dir.join(name), content);
        }
        fs::create_dir_all(&tables.text_dir).unwrap();
        Self { dir, tables }
    }

    /// Dog / Canine (redirect to Dog) / Cat; Cat links to Canine.
    pub fn dog_cat() -> Self {
        Self::new(
            "1,0,Dog,,0,0\n2,0,Canine,,0,1\n3,0,Cat,,0,0\n",
            "Dog\tAnimal\nCat\tAnimal\n",
            "2,0,Dog,,\n",
            "3,0,Canine,0\n",
            &[(
                "AA/wiki_00",
                "{\"id\": \"1\", \"text\": \"Dogs bark.\"}\n{\"id\": 3, \"text\": \"Cats meow.\"}\n",
            )],
        )
    }
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Page rows in `id,namespace,title,restrictions,counter,is_redirect` form.
pub fn page_rows(rows: &[(u64, i32, &str, bool)]) -> String {
    rows.iter()
        .map(|(id, ns, title, redirect)| format!("{id},{ns},{title},,0,{}\n", u8::from(*redirect)))
        .collect()
}

pub fn text_line(id: u64, text: &str) -> String {
    format!("{}\n", serde_json::json!({ "id": id.to_string(), "text": text }))
}
