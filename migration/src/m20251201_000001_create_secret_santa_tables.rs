use sea_orm_migration::prelude::*;

/// Participants (参与者表)
#[derive(DeriveIden)]
enum Participants {
    Table,
    Id,
    EventName,
    Name,
    Email,
    Sms,
    Token,
    AssignedToId,
    GiftReady,
    CreatedAt,
}

/// Admin Configs (活动管理配置表, 每个活动一条)
#[derive(DeriveIden)]
enum AdminConfigs {
    Table,
    Id,
    EventName,
    PinHash,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 字段说明:
/// - participants.event_name: 分区键，所有查询都按活动名过滤
/// - participants.token: 参与者私有令牌 (唯一)
/// - participants.assigned_to_id: 抽签写入的送礼对象 (NULL = 未抽签)
/// - admin_configs.pin_hash: bcrypt 哈希, 明文 PIN 不落库
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 参与者表
        manager
            .create_table(
                Table::create()
                    .table(Participants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Participants::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Participants::EventName).text().not_null())
                    .col(ColumnDef::new(Participants::Name).text().not_null())
                    .col(ColumnDef::new(Participants::Email).text())
                    .col(ColumnDef::new(Participants::Sms).text())
                    .col(ColumnDef::new(Participants::Token).uuid().not_null())
                    .col(ColumnDef::new(Participants::AssignedToId).uuid())
                    .col(
                        ColumnDef::new(Participants::GiftReady)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Participants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // token 唯一索引（私有链接凭据）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_participants_token_unique")
                    .table(Participants::Table)
                    .col(Participants::Token)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // event_name 普通索引（所有列表/抽签查询都按活动过滤）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_participants_event_name")
                    .table(Participants::Table)
                    .col(Participants::EventName)
                    .to_owned(),
            )
            .await?;

        // 管理配置表
        manager
            .create_table(
                Table::create()
                    .table(AdminConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminConfigs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminConfigs::EventName).text().not_null())
                    .col(ColumnDef::new(AdminConfigs::PinHash).text().not_null())
                    .col(
                        ColumnDef::new(AdminConfigs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // event_name 唯一索引（一个活动一条管理配置）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_admin_configs_event_name_unique")
                    .table(AdminConfigs::Table)
                    .col(AdminConfigs::EventName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminConfigs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Participants::Table).to_owned())
            .await?;
        Ok(())
    }
}
