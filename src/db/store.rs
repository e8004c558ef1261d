use crate::constants::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, DEFAULT_EXPERIENCE_YEARS, DEFAULT_PFP_PATH,
};
use crate::db::{SqlitePool, SQLITE_INIT};
use crate::error::Result;
use crate::models::{Admin, ContactSettings, Project, Skill};
use crate::security;

/// Typed data-access layer over the SQLite pool.
///
/// Every method issues exactly one parameterized statement; values reach the
/// database through bind parameters only, never through string
/// interpolation. The admin, contact and experience records are single-value
/// settings - their row identity is private to this module.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    ///
    /// Failures here are fatal to startup.
    pub async fn init_schema(&self) -> Result<()> {
        // sqlx::query takes one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the default admin account, contact settings and experience
    /// record if they are missing. Idempotent: existing records are never
    /// overwritten.
    pub async fn seed_defaults(&self) -> Result<()> {
        if self.admin().await?.is_none() {
            let hash = security::hash_password(DEFAULT_ADMIN_PASSWORD)?;
            sqlx::query("INSERT INTO admin (id, username, password_hash, pfp) VALUES (1, ?, ?, ?)")
                .bind(DEFAULT_ADMIN_USERNAME)
                .bind(hash)
                .bind(DEFAULT_PFP_PATH)
                .execute(&self.pool)
                .await?;
            tracing::info!("Seeded default admin account");
        }

        if self.contact().await?.is_none() {
            sqlx::query(
                r#"INSERT INTO contact (id, name, email, phone, whatsapp, address, hero_title, hero_sub)
                   VALUES (1, ?, ?, ?, ?, ?, ?, ?)"#,
            )
            .bind("Admin")
            .bind("admin@example.com")
            .bind("")
            .bind("")
            .bind("")
            .bind("Let's build something great")
            .bind("Reach out to discuss projects, collabs or just say hi.")
            .execute(&self.pool)
            .await?;
            tracing::info!("Seeded default contact settings");
        }

        if self.experience_years().await?.is_none() {
            sqlx::query("INSERT INTO experience (id, years) VALUES (1, ?)")
                .bind(DEFAULT_EXPERIENCE_YEARS)
                .execute(&self.pool)
                .await?;
            tracing::info!("Seeded default experience record");
        }

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Admin account (single record)
    // -------------------------------------------------------------------------

    pub async fn admin(&self) -> Result<Option<Admin>> {
        let row = sqlx::query_as::<_, Admin>(
            "SELECT username, password_hash, pfp FROM admin WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        let row = sqlx::query_as::<_, Admin>(
            "SELECT username, password_hash, pfp FROM admin WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn set_username(&self, username: &str) -> Result<()> {
        sqlx::query("UPDATE admin SET username = ? WHERE id = 1")
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn set_password_hash(&self, hash: &str) -> Result<()> {
        sqlx::query("UPDATE admin SET password_hash = ? WHERE id = 1")
            .bind(hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn set_pfp(&self, path: &str) -> Result<()> {
        sqlx::query("UPDATE admin SET pfp = ? WHERE id = 1")
            .bind(path)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Contact settings (single record)
    // -------------------------------------------------------------------------

    pub async fn contact(&self) -> Result<Option<ContactSettings>> {
        let row = sqlx::query_as::<_, ContactSettings>(
            r#"SELECT name, email, phone, whatsapp, address, hero_title, hero_sub
               FROM contact WHERE id = 1"#,
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn set_contact(&self, contact: &ContactSettings) -> Result<()> {
        sqlx::query(
            r#"UPDATE contact
               SET name = ?, email = ?, phone = ?, whatsapp = ?, address = ?,
                   hero_title = ?, hero_sub = ?
               WHERE id = 1"#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.whatsapp)
        .bind(&contact.address)
        .bind(&contact.hero_title)
        .bind(&contact.hero_sub)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Experience (single record)
    // -------------------------------------------------------------------------

    pub async fn experience_years(&self) -> Result<Option<i64>> {
        let years = sqlx::query_scalar("SELECT years FROM experience WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(years)
    }

    pub async fn set_experience_years(&self, years: i64) -> Result<()> {
        sqlx::query("UPDATE experience SET years = ? WHERE id = 1")
            .bind(years)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Skills
    // -------------------------------------------------------------------------

    /// All skills in insertion order.
    pub async fn skills(&self) -> Result<Vec<Skill>> {
        let rows =
            sqlx::query_as::<_, Skill>("SELECT id, label, percentage FROM skills ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// The percentage is stored verbatim - no clamping to 0-100.
    pub async fn add_skill(&self, label: &str, percentage: i64) -> Result<()> {
        sqlx::query("INSERT INTO skills (label, percentage) VALUES (?, ?)")
            .bind(label)
            .bind(percentage)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn update_skill(&self, id: i64, label: &str, percentage: i64) -> Result<()> {
        sqlx::query("UPDATE skills SET label = ?, percentage = ? WHERE id = ?")
            .bind(label)
            .bind(percentage)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Deleting a nonexistent id is a no-op, not an error.
    pub async fn delete_skill(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Projects
    // -------------------------------------------------------------------------

    /// All projects, newest first. CURRENT_TIMESTAMP has one-second
    /// granularity, so the id is the tiebreak for same-second inserts.
    pub async fn projects_newest_first(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query_as::<_, Project>(
            r#"SELECT id, title, description, link, img_url, created_at
               FROM projects ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn project_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn add_project(
        &self,
        title: &str,
        description: &str,
        link: &str,
        img_url: Option<&str>,
    ) -> Result<()> {
        sqlx::query("INSERT INTO projects (title, description, link, img_url) VALUES (?, ?, ?, ?)")
            .bind(title)
            .bind(description)
            .bind(link)
            .bind(img_url)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Update project fields, leaving any stored image untouched.
    pub async fn update_project(
        &self,
        id: i64,
        title: &str,
        description: &str,
        link: &str,
    ) -> Result<()> {
        sqlx::query("UPDATE projects SET title = ?, description = ?, link = ? WHERE id = ?")
            .bind(title)
            .bind(description)
            .bind(link)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Update project fields including a freshly uploaded image path.
    pub async fn update_project_with_image(
        &self,
        id: i64,
        title: &str,
        description: &str,
        link: &str,
        img_url: &str,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE projects SET title = ?, description = ?, link = ?, img_url = ? WHERE id = ?",
        )
        .bind(title)
        .bind(description)
        .bind(link)
        .bind(img_url)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Deleting a nonexistent id is a no-op, not an error. The image file
    /// referenced by the row (if any) stays on disk.
    pub async fn delete_project(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) async fn count_rows(&self, table: &str) -> Result<i64> {
        use sqlx::Row;

        // Test-only helper; table names come from the test code itself.
        let row = sqlx::query(&format!("SELECT COUNT(*) AS c FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("c")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_store() -> Store {
        // A single-connection pool keeps the in-memory database alive and
        // shared for the whole test.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");
        let store = Store::new(pool);
        store.init_schema().await.expect("init schema");
        store
    }

    #[tokio::test]
    async fn test_seed_defaults_is_idempotent() {
        let store = test_store().await;

        store.seed_defaults().await.expect("first seed");
        let admin_before = store.admin().await.unwrap().expect("admin seeded");

        store.seed_defaults().await.expect("second seed");

        assert_eq!(store.count_rows("admin").await.unwrap(), 1);
        assert_eq!(store.count_rows("contact").await.unwrap(), 1);
        assert_eq!(store.count_rows("experience").await.unwrap(), 1);

        // Values survive the second run untouched (the password hash is
        // salted, so a re-insert would differ).
        let admin_after = store.admin().await.unwrap().unwrap();
        assert_eq!(admin_before.username, admin_after.username);
        assert_eq!(admin_before.password_hash, admin_after.password_hash);
        assert_eq!(store.experience_years().await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_skill_percentage_stored_verbatim() {
        let store = test_store().await;

        store.add_skill("Rust", 150).await.unwrap();
        store.add_skill("SQL", -5).await.unwrap();

        let skills = store.skills().await.unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].label, "Rust");
        assert_eq!(skills[0].percentage, 150);
        assert_eq!(skills[1].percentage, -5);
    }

    #[tokio::test]
    async fn test_singleton_updates_in_place() {
        let store = test_store().await;
        store.seed_defaults().await.unwrap();

        store.set_experience_years(7).await.unwrap();

        assert_eq!(store.experience_years().await.unwrap(), Some(7));
        assert_eq!(store.count_rows("experience").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_project_missing_id_is_noop() {
        let store = test_store().await;

        store
            .add_project("Site", "A site", "https://example.com", None)
            .await
            .unwrap();
        store.delete_project(9999).await.expect("no-op delete");

        assert_eq!(store.project_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_projects_order_newest_first() {
        let store = test_store().await;

        store.add_project("first", "", "", None).await.unwrap();
        store
            .add_project("second", "", "", Some("/static/uploads/b.png"))
            .await
            .unwrap();

        let projects = store.projects_newest_first().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "second");
        assert_eq!(projects[1].title, "first");
        assert_eq!(
            projects[0].img_url.as_deref(),
            Some("/static/uploads/b.png")
        );
        assert!(projects[1].img_url.is_none());
    }

    #[tokio::test]
    async fn test_update_project_preserves_image() {
        let store = test_store().await;

        store
            .add_project("t", "d", "l", Some("/static/uploads/x.png"))
            .await
            .unwrap();
        let id = store.projects_newest_first().await.unwrap()[0].id;

        store.update_project(id, "t2", "d2", "l2").await.unwrap();

        let p = &store.projects_newest_first().await.unwrap()[0];
        assert_eq!(p.title, "t2");
        assert_eq!(p.img_url.as_deref(), Some("/static/uploads/x.png"));
    }
}
