use std::fmt;

/// Engine identifiers whose databases accept `COMMENT ON` statements.
pub const POSTGRES_ENGINES: [&str; 4] = [
    "django.db.backends.postgresql",
    "django.contrib.gis.db.backends.postgis",
    "django.db.backends.postgresql_psycopg2",
    "psqlextra.backend",
];

/// Short engine names accepted in addition to [`POSTGRES_ENGINES`].
const POSTGRES_SHORT_NAMES: [&str; 3] = ["postgres", "postgresql", "postgis"];

/// Database engine family, classified once from the configured engine string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseEngine {
    Postgres,
    Other,
}

impl DatabaseEngine {
    /// Exact, case-sensitive match against the known engine identifiers.
    pub fn classify(engine: &str) -> Self {
        if POSTGRES_ENGINES.contains(&engine) || POSTGRES_SHORT_NAMES.contains(&engine) {
            DatabaseEngine::Postgres
        } else {
            DatabaseEngine::Other
        }
    }

    pub fn supports_comments(self) -> bool {
        matches!(self, DatabaseEngine::Postgres)
    }
}

impl From<&str> for DatabaseEngine {
    fn from(engine: &str) -> Self {
        Self::classify(engine)
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseEngine::Postgres => write!(f, "postgres"),
            DatabaseEngine::Other => write!(f, "other"),
        }
    }
}
