use todos_server::db::SCHEMA_SQL;

/// Print the bundled schema, e.g. `todos schema | psql "$DATABASE_URL"`
pub fn run_schema() {
    print!("{SCHEMA_SQL}");
}
