//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and fixtures.
/// Methods can be chained together and finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_billing_tables: bool,

    // Database fixtures to insert
    include_default_settings: bool,
    settings: Vec<(String, f64)>,
    corporations: Vec<i64>,
    characters: Vec<(i64, i64)>, // (char_id, corp_id)
    users_for_characters: Vec<i64>, // character_ids to create users for
    market_prices: Vec<(i64, f64)>, // (type_id, average_price)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_billing_tables: false,
            include_default_settings: false,
            settings: Vec::new(),
            corporations: Vec::new(),
            characters: Vec::new(),
            users_for_characters: Vec::new(),
            market_prices: Vec::new(),
        }
    }

    /// Add every table read or written by billing to the test database.
    ///
    /// Tables are created in foreign key order: corporations, characters, users, character
    /// ownership, member tracking, market prices, mining ledgers, wallet journals, settings and
    /// both bill tables.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_billing_tables(mut self) -> Self {
        self.include_billing_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use billing_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), billing_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(EveCorporation)
    ///     .with_table(EveCharacter)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert every tax policy setting with its default test value.
    ///
    /// See [`DEFAULT_TAX_SETTINGS`](crate::constant::DEFAULT_TAX_SETTINGS) for the values.
    pub fn with_default_settings(mut self) -> Self {
        self.include_default_settings = true;
        self
    }

    /// Insert a single tax policy setting.
    ///
    /// # Arguments
    /// - `name` - Setting name, e.g. `irate`
    /// - `value` - Setting value as a percentage
    pub fn with_setting(mut self, name: impl Into<String>, value: f64) -> Self {
        self.settings.push((name.into(), value));
        self
    }

    /// Insert mock corporation into database.
    ///
    /// # Arguments
    /// - `corporation_id` - The EVE Online corporation ID
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_corporation(mut self, corporation_id: i64) -> Self {
        self.corporations.push(corporation_id);
        self
    }

    /// Insert mock character into database.
    ///
    /// The character's corporation is created automatically if it doesn't already exist.
    ///
    /// # Arguments
    /// - `character_id` - The EVE Online character ID
    /// - `corporation_id` - The corporation ID the character belongs to
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_character(mut self, character_id: i64, corporation_id: i64) -> Self {
        self.characters.push((character_id, corporation_id));
        self
    }

    /// Create a user with the character as main.
    ///
    /// The character must be added via `with_mock_character` before calling this method.
    ///
    /// # Arguments
    /// - `character_id` - The character ID to create a user for
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user_for_character(mut self, character_id: i64) -> Self {
        self.users_for_characters.push(character_id);
        self
    }

    /// Insert the market price of an ore type.
    ///
    /// # Arguments
    /// - `type_id` - Ore type ID
    /// - `average_price` - Average market price per unit
    pub fn with_market_price(mut self, type_id: i64, average_price: f64) -> Self {
        self.market_prices.push((type_id, average_price));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (billing tables if specified, then custom tables)
    /// 2. Inserts settings
    /// 3. Inserts EVE fixtures (corporations, characters, market prices) and users
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_billing_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::EveCorporation),
                schema.create_table_from_entity(entity::prelude::EveCharacter),
                schema.create_table_from_entity(entity::prelude::AuthUser),
                schema.create_table_from_entity(entity::prelude::AuthUserCharacter),
                schema.create_table_from_entity(entity::prelude::EveCorporationMemberTracking),
                schema.create_table_from_entity(entity::prelude::EveMarketPrice),
                schema.create_table_from_entity(entity::prelude::EveCharacterMining),
                schema.create_table_from_entity(entity::prelude::EveCorporationWalletJournal),
                schema.create_table_from_entity(entity::prelude::BillingSetting),
                schema.create_table_from_entity(entity::prelude::BillingCorporationBill),
                schema.create_table_from_entity(entity::prelude::BillingCharacterBill),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert settings
        if self.include_default_settings {
            setup.billing().insert_default_settings().await?;
        }

        for (name, value) in self.settings {
            setup.billing().insert_setting(&name, value).await?;
        }

        // 3. Insert database fixtures
        for corporation_id in self.corporations {
            setup.eve().insert_mock_corporation(corporation_id).await?;
        }

        for (character_id, corporation_id) in self.characters {
            setup
                .eve()
                .insert_mock_character(character_id, corporation_id)
                .await?;
        }

        for (type_id, average_price) in self.market_prices {
            setup
                .eve()
                .insert_market_price(type_id, average_price)
                .await?;
        }

        for character_id in self.users_for_characters {
            setup.user().insert_user(character_id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
