use sqlx::SqlitePool;

use crate::error::Result;

pub const ADMIN_PIN_KEY: &str = "admin_pin";

pub struct SettingsRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = sqlx::query_scalar::<_, Option<String>>("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(self.pool)
            .await?
            .flatten();

        Ok(value)
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value) VALUES (?, ?)
            ON CONFLICT (key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// The configured admin PIN, if one is set
    pub async fn admin_pin(&self) -> Result<Option<String>> {
        let pin = self.get(ADMIN_PIN_KEY).await?;
        Ok(pin.filter(|p| !p.is_empty()))
    }

    pub async fn set_admin_pin(&self, pin: &str) -> Result<()> {
        self.set(ADMIN_PIN_KEY, pin.trim()).await?;
        tracing::info!(
            "Admin PIN {}",
            if pin.trim().is_empty() { "cleared" } else { "updated" }
        );
        Ok(())
    }
}
