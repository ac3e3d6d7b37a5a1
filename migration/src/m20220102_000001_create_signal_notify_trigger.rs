use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Installs the trigger behind the `signal_events` channel. Every insert
/// or update on `signals` emits a JSON payload carrying the operation plus
/// the prior and new row, so listeners can filter transitions client-side.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared(
            r#"
            CREATE OR REPLACE FUNCTION notify_signal_event() RETURNS trigger AS $$
            BEGIN
                PERFORM pg_notify(
                    'signal_events',
                    json_build_object(
                        'op', TG_OP,
                        'before', CASE WHEN TG_OP = 'UPDATE' THEN row_to_json(OLD) ELSE NULL END,
                        'after', row_to_json(NEW)
                    )::text
                );
                RETURN NEW;
            END;
            $$ LANGUAGE plpgsql;
            "#,
        )
        .await?;

        conn.execute_unprepared(
            r#"
            CREATE TRIGGER signals_notify_event
            AFTER INSERT OR UPDATE ON signals
            FOR EACH ROW EXECUTE FUNCTION notify_signal_event();
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared("DROP TRIGGER IF EXISTS signals_notify_event ON signals;")
            .await?;
        conn.execute_unprepared("DROP FUNCTION IF EXISTS notify_signal_event();")
            .await?;

        Ok(())
    }
}
