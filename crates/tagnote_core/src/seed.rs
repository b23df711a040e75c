//! First-run seed content.
//!
//! Seed records are plain tuples. Tags are referenced through local keys that
//! the notebook maps to freshly assigned ids while materializing them.

/// Seed tag: a local reference key plus its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTag {
    pub key: String,
    pub label: String,
}

/// Seed note referencing seed tags by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedNote {
    pub title: String,
    pub markdown: String,
    pub tag_keys: Vec<String>,
}

/// Static content materialized into an empty notebook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub tags: Vec<SeedTag>,
    pub notes: Vec<SeedNote>,
}

impl SeedData {
    /// Seed with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tag(mut self, key: &str, label: &str) -> Self {
        self.tags.push(SeedTag {
            key: key.to_string(),
            label: label.to_string(),
        });
        self
    }

    pub fn note(mut self, title: &str, markdown: &str, tag_keys: &[&str]) -> Self {
        self.notes.push(SeedNote {
            title: title.to_string(),
            markdown: markdown.to_string(),
            tag_keys: tag_keys.iter().map(|key| key.to_string()).collect(),
        });
        self
    }

    /// Stock notes shown on a fresh install.
    pub fn default_content() -> Self {
        Self::empty()
            .tag("info", "Info")
            .tag("concepts", "Concepts")
            .note("Project Description", PROJECT_DESCRIPTION, &["info"])
            .note("Hooks", HOOKS, &["info", "concepts"])
            .note("Routing", ROUTING, &["info", "concepts"])
    }
}

const PROJECT_DESCRIPTION: &str = r#"## React Notes App

A fully-featured Note-taking App built with **React** and **Typescript**, combining the simplicity of a classic To-Do list with powerful enhancements like:

- Create / Read / Update / Delete (CRUD) notes and tags
- Markdown Support for rich text formatting
- LocalStorage Persistence to save notes in the browser

---

### Tech Stack

- React
- TypeScript
- React Router v6
- React Bootstrap
- React-Select + Creatable
- UUID for unique note IDs
- React Markdown for rendering markdown safely"#;

const HOOKS: &str = r#"This project makes use of several built-in and custom React hooks to manage state, side effects, routing, and local storage efficiently.

### Hooks Used

- `useState` – for managing component-level state
- `useRef` – for referencing DOM elements and storing mutable values
- `useEffect` – to handle side effects like fetching or syncing data
- `useMemo` – for memoizing computed values to optimize performance
- `useNavigate` – for programmatic navigation using React Router v6
- `useParams` – to access route parameters from the URL
- `useOutletContext` – for shared state and global access across components
- `useLocalStorage` – a custom hook to persist state in localStorage"#;

const ROUTING: &str = r#"## React Router v6

The app uses React Router v6 for client-side routing. Each note has a unique URL and routes are nested for better structure and layout control."#;
