//! Budget service
//!
//! Owns the ledger lifecycle: one-time allotment seeding, one-time legacy
//! cleanup, explicit destructive reimport, expense edits, and the derived
//! figures (per-kind totals and percentages, net after expenses).
//!
//! The ledger is independent of the pay engine except for seeding and the
//! income figure, which is re-derived from the shared configuration through
//! the same engine the pay view uses.

use crate::engine::PayEngine;
use crate::error::{SeapayError, SeapayResult};
use crate::models::expense::ensure_colors;
use crate::models::{Expense, ExpenseId, ExpenseKind, PayConfiguration};
use crate::storage::{LedgerData, LedgerRepository, PayConfigStore};

/// Derived per-kind totals for the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTotals {
    pub total: f64,
    pub need: f64,
    pub want: f64,
    pub savings: f64,
    /// Integer percentages of the ledger's own total
    pub need_pct: u32,
    pub want_pct: u32,
    pub savings_pct: u32,
    pub items: usize,
    pub average: f64,
}

/// Income versus the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    /// Net pay excluding allotments, re-derived from the shared configuration
    pub income_monthly: f64,
    pub expenses_monthly: f64,
    /// May be negative when the ledger outruns income
    pub net_after_expenses: f64,
}

/// Service for budget ledger management
pub struct BudgetService<'a> {
    ledger: &'a LedgerRepository,
    pay_store: &'a dyn PayConfigStore,
    engine: &'a PayEngine,
    /// Configuration cache keyed by the store's change fingerprint
    config_cache: Option<(u64, PayConfiguration)>,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(
        ledger: &'a LedgerRepository,
        pay_store: &'a dyn PayConfigStore,
        engine: &'a PayEngine,
    ) -> Self {
        Self {
            ledger,
            pay_store,
            engine,
            config_cache: None,
        }
    }

    /// Load the ledger, applying the one-shot steps
    ///
    /// Order: color maintenance, then the legacy cleanup, then the
    /// first-run allotment seeding (which only applies to a still-empty
    /// ledger). Changes are persisted before returning.
    pub fn open(&mut self) -> SeapayResult<LedgerData> {
        let loaded = self.ledger.load()?;
        let mut data = loaded.clone();

        ensure_colors(&mut data.expenses);
        self.migrate(&mut data);
        self.seed(&mut data)?;

        if changed(&loaded, &data) {
            self.ledger.save(&data)?;
        }
        Ok(data)
    }

    /// Clear the ledger and re-seed it from the current allotments
    ///
    /// Destructive: manual edits are overwritten. Both one-shot flags are
    /// set regardless of how many lines were seeded.
    pub fn reimport(&mut self) -> SeapayResult<LedgerData> {
        let mut data = self.ledger.load()?;
        data.expenses = seed_lines(&self.current_config()?);
        ensure_colors(&mut data.expenses);
        data.imported_once = true;
        data.migrated = true;
        self.ledger.save(&data)?;
        Ok(data)
    }

    /// Add an expense line and persist
    pub fn add_expense(
        &mut self,
        name: impl Into<String>,
        amount: f64,
        kind: ExpenseKind,
    ) -> SeapayResult<Expense> {
        let mut data = self.open()?;
        let expense = Expense::new(name, amount.max(0.0), kind, data.expenses.len());
        let added = expense.clone();
        data.expenses.push(expense);
        self.ledger.save(&data)?;
        Ok(added)
    }

    /// Edit an expense line by id and persist
    pub fn edit_expense(
        &mut self,
        id: ExpenseId,
        edit: impl FnOnce(&mut Expense),
    ) -> SeapayResult<Expense> {
        let mut data = self.open()?;
        let Some(expense) = data.expenses.iter_mut().find(|e| e.id == id) else {
            return Err(SeapayError::expense_not_found(id.to_string()));
        };
        edit(expense);
        expense.amount = expense.amount.max(0.0);
        let edited = expense.clone();
        ensure_colors(&mut data.expenses);
        self.ledger.save(&data)?;
        Ok(edited)
    }

    /// Remove an expense line by id and persist
    pub fn remove_expense(&mut self, id: ExpenseId) -> SeapayResult<()> {
        let mut data = self.open()?;
        let before = data.expenses.len();
        data.expenses.retain(|e| e.id != id);
        if data.expenses.len() == before {
            return Err(SeapayError::expense_not_found(id.to_string()));
        }
        self.ledger.save(&data)?;
        Ok(())
    }

    /// Per-kind totals and percentages for a ledger
    pub fn totals(&self, data: &LedgerData) -> BudgetTotals {
        let sum_kind = |kind: ExpenseKind| -> f64 {
            data.expenses
                .iter()
                .filter(|e| e.kind == kind)
                .map(|e| e.amount)
                .sum()
        };

        let need = sum_kind(ExpenseKind::Need);
        let want = sum_kind(ExpenseKind::Want);
        let savings = sum_kind(ExpenseKind::Savings);
        let total: f64 = data.expenses.iter().map(|e| e.amount).sum();

        // Percentages are of the ledger's own total; an empty ledger
        // divides by 1 instead of 0
        let denominator = if total != 0.0 { total } else { 1.0 };
        let pct = |part: f64| ((part / denominator) * 100.0).round() as u32;

        let items = data.expenses.len();
        BudgetTotals {
            total,
            need,
            want,
            savings,
            need_pct: pct(need),
            want_pct: pct(want),
            savings_pct: pct(savings),
            items,
            average: if items > 0 { total / items as f64 } else { 0.0 },
        }
    }

    /// Net pay excluding allotments, re-derived from the shared
    /// configuration
    pub fn net_income(&mut self) -> SeapayResult<f64> {
        let config = self.current_config()?;
        Ok(self.engine.breakdown(&config).net_monthly_excl_allotments)
    }

    /// Income versus the ledger
    pub fn summary(&mut self, data: &LedgerData) -> SeapayResult<BudgetSummary> {
        let income_monthly = self.net_income()?;
        let expenses_monthly: f64 = data.expenses.iter().map(|e| e.amount).sum();
        Ok(BudgetSummary {
            income_monthly,
            expenses_monthly,
            net_after_expenses: income_monthly - expenses_monthly,
        })
    }

    /// The shared configuration, reloaded when the store fingerprint moves
    ///
    /// Best-effort cross-view awareness: an edit saved from the pay view
    /// bumps the fingerprint, so the next budget derivation sees it without
    /// any further coordination. Last write wins.
    fn current_config(&mut self) -> SeapayResult<PayConfiguration> {
        let revision = self.pay_store.revision();
        let stale = !matches!(&self.config_cache, Some((r, _)) if *r == revision);
        if stale {
            self.config_cache = Some((revision, self.pay_store.load()?));
        }
        match &self.config_cache {
            Some((_, config)) => Ok(config.clone()),
            None => self.pay_store.load(),
        }
    }

    /// One-time legacy cleanup
    ///
    /// Earlier seeding logic copied tax and insurance lines into the
    /// ledger. If any are present, strip them and mark the migration done;
    /// a ledger with none keeps the flag clear.
    fn migrate(&self, data: &mut LedgerData) {
        if data.migrated {
            return;
        }
        if data
            .expenses
            .iter()
            .any(|e| is_legacy_trigger_name(&e.name))
        {
            data.expenses.retain(|e| !is_legacy_seeded_name(&e.name));
            ensure_colors(&mut data.expenses);
            data.migrated = true;
        }
    }

    /// One-time allotment seeding
    ///
    /// Only an empty, never-imported ledger is seeded, and the flag is set
    /// only when at least one line came over — so a configuration with no
    /// allotments leaves seeding armed for a later visit.
    fn seed(&mut self, data: &mut LedgerData) -> SeapayResult<()> {
        if data.imported_once || !data.expenses.is_empty() {
            return Ok(());
        }
        let lines = seed_lines(&self.current_config()?);
        if !lines.is_empty() {
            data.expenses = lines;
            ensure_colors(&mut data.expenses);
            data.imported_once = true;
        }
        Ok(())
    }
}

/// Expense lines seeded from a configuration's allotments
///
/// Tax, insurance, and other deduction lines are explicitly excluded; only
/// allotments with a positive amount come over, as "need" lines.
fn seed_lines(config: &PayConfiguration) -> Vec<Expense> {
    config
        .allotments
        .iter()
        .filter(|a| !a.name.trim().is_empty() || a.amount != 0.0)
        .enumerate()
        .map(|(i, a)| {
            let name = if a.name.trim().is_empty() {
                "Allotment"
            } else {
                a.name.as_str()
            };
            Expense::new(name, a.amount.max(0.0), ExpenseKind::Need, i)
        })
        .filter(|e| e.amount > 0.0)
        .collect()
}

/// Whether a name marks the ledger as needing the legacy cleanup
fn is_legacy_trigger_name(name: &str) -> bool {
    let n = normalize(name);
    n.contains("fica") || n.contains("federaltax") || n.contains("insurance")
}

/// Whether a name is one the legacy seeding introduced
fn is_legacy_seeded_name(name: &str) -> bool {
    let n = normalize(name);
    n.contains("fica")
        || n.contains("medicare")
        || n.contains("socialsec")
        || n.contains("federaltax")
        || n.contains("insurance")
}

/// Lowercase with whitespace removed, so "Federal  Tax" matches
fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn changed(before: &LedgerData, after: &LedgerData) -> bool {
    before.imported_once != after.imported_once
        || before.migrated != after.migrated
        || before.expenses != after.expenses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Allotment;
    use crate::storage::MemoryPayConfigStore;
    use tempfile::TempDir;

    struct Fixture {
        _temp_dir: TempDir,
        ledger: LedgerRepository,
        store: MemoryPayConfigStore,
        engine: PayEngine,
    }

    fn fixture(config: PayConfiguration) -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let ledger = LedgerRepository::new(temp_dir.path().join("budget-ledger.json"));
        Fixture {
            _temp_dir: temp_dir,
            ledger,
            store: MemoryPayConfigStore::with_config(config),
            engine: PayEngine::year_2025(),
        }
    }

    fn config_with_allotments() -> PayConfiguration {
        let mut config = PayConfiguration::default();
        config.allotments.push(Allotment::new("Rent", 100.0));
        config.allotments.push(Allotment::new("Car", 50.0));
        config
    }

    #[test]
    fn test_first_open_seeds_from_allotments() {
        let fx = fixture(config_with_allotments());
        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);

        let data = service.open().unwrap();
        assert_eq!(data.expenses.len(), 2);
        assert_eq!(data.expenses[0].name, "Rent");
        assert_eq!(data.expenses[1].amount, 50.0);
        assert!(data.expenses.iter().all(|e| e.kind == ExpenseKind::Need));
        assert!(data.imported_once);

        // And it persisted
        let reloaded = fx.ledger.load().unwrap();
        assert!(reloaded.imported_once);
        assert_eq!(reloaded.expenses.len(), 2);
    }

    #[test]
    fn test_seeding_skips_zero_and_unnamed_empty_allotments() {
        let mut config = PayConfiguration::default();
        config.allotments.push(Allotment::new("", 0.0));
        config.allotments.push(Allotment::new("Zeroed", 0.0));
        config.allotments.push(Allotment::new("", 75.0));
        let fx = fixture(config);
        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);

        let data = service.open().unwrap();
        // Only the positive-amount line seeds; its name falls back
        assert_eq!(data.expenses.len(), 1);
        assert_eq!(data.expenses[0].name, "Allotment");
        assert_eq!(data.expenses[0].amount, 75.0);
        assert!(data.imported_once);
    }

    #[test]
    fn test_no_allotments_leaves_seeding_armed() {
        let fx = fixture(PayConfiguration::default());
        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);

        let data = service.open().unwrap();
        assert!(data.expenses.is_empty());
        assert!(!data.imported_once);
    }

    #[test]
    fn test_seeding_runs_once() {
        let fx = fixture(config_with_allotments());
        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);

        let data = service.open().unwrap();
        let first = data.expenses[0].id;
        service.remove_expense(first).unwrap();

        // Re-opening must not re-seed the removed line
        let data = service.open().unwrap();
        assert_eq!(data.expenses.len(), 1);
        assert!(data.imported_once);
    }

    #[test]
    fn test_migration_strips_legacy_lines() {
        let fx = fixture(PayConfiguration::default());

        let mut data = LedgerData::default();
        data.expenses
            .push(Expense::new("FICA Social Sec.", 300.0, ExpenseKind::Need, 0));
        data.expenses
            .push(Expense::new("FICA Medicare", 60.0, ExpenseKind::Need, 1));
        data.expenses
            .push(Expense::new("Insurance", 31.0, ExpenseKind::Need, 2));
        data.expenses
            .push(Expense::new("Rent", 800.0, ExpenseKind::Need, 3));
        data.imported_once = true;
        fx.ledger.save(&data).unwrap();

        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);
        let data = service.open().unwrap();

        assert_eq!(data.expenses.len(), 1);
        assert_eq!(data.expenses[0].name, "Rent");
        assert!(data.migrated);
    }

    #[test]
    fn test_migration_flag_stays_clear_without_legacy_lines() {
        let fx = fixture(PayConfiguration::default());

        let mut data = LedgerData::default();
        data.expenses
            .push(Expense::new("Rent", 800.0, ExpenseKind::Need, 0));
        data.imported_once = true;
        fx.ledger.save(&data).unwrap();

        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);
        let data = service.open().unwrap();

        assert_eq!(data.expenses.len(), 1);
        assert!(!data.migrated);
    }

    #[test]
    fn test_reimport_is_destructive_and_sets_both_flags() {
        let fx = fixture(config_with_allotments());
        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);

        service.open().unwrap();
        service
            .add_expense("Manual Line", 42.0, ExpenseKind::Want)
            .unwrap();

        let data = service.reimport().unwrap();
        assert_eq!(data.expenses.len(), 2);
        let total: f64 = data.expenses.iter().map(|e| e.amount).sum();
        assert_eq!(total, 150.0);
        assert!(data.imported_once);
        assert!(data.migrated);
        assert!(data.expenses.iter().all(|e| e.name != "Manual Line"));
    }

    #[test]
    fn test_totals_and_percentages() {
        let fx = fixture(PayConfiguration::default());
        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);

        service.add_expense("Rent", 600.0, ExpenseKind::Need).unwrap();
        service.add_expense("Games", 300.0, ExpenseKind::Want).unwrap();
        service
            .add_expense("Emergency", 100.0, ExpenseKind::Savings)
            .unwrap();

        let data = service.open().unwrap();
        let totals = service.totals(&data);

        assert_eq!(totals.total, 1000.0);
        assert_eq!(totals.need_pct, 60);
        assert_eq!(totals.want_pct, 30);
        assert_eq!(totals.savings_pct, 10);
        assert_eq!(totals.items, 3);
        assert!((totals.average - 1000.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_ledger_totals_avoid_division_by_zero() {
        let fx = fixture(PayConfiguration::default());
        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);

        let data = service.open().unwrap();
        let totals = service.totals(&data);

        assert_eq!(totals.total, 0.0);
        assert_eq!(totals.need_pct, 0);
        assert_eq!(totals.want_pct, 0);
        assert_eq!(totals.savings_pct, 0);
        assert_eq!(totals.average, 0.0);
    }

    #[test]
    fn test_summary_uses_net_excluding_allotments() {
        let fx = fixture(PayConfiguration::default());
        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);

        service.add_expense("Rent", 500.0, ExpenseKind::Need).unwrap();
        let data = service.open().unwrap();

        let expected_income = fx
            .engine
            .breakdown(&fx.store.load().unwrap())
            .net_monthly_excl_allotments;

        let summary = service.summary(&data).unwrap();
        assert_eq!(summary.income_monthly, expected_income);
        assert_eq!(summary.expenses_monthly, 500.0);
        assert_eq!(
            summary.net_after_expenses,
            expected_income - 500.0
        );
    }

    #[test]
    fn test_income_tracks_external_config_changes() {
        let fx = fixture(PayConfiguration::default());
        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);

        let before = service.net_income().unwrap();

        // Another view edits the shared configuration
        let mut config = fx.store.load().unwrap();
        config.grade = crate::models::PayGrade::O6;
        config.years_of_service = 22;
        fx.store.save(&config).unwrap();

        let after = service.net_income().unwrap();
        assert!(after > before);
    }

    #[test]
    fn test_edit_expense() {
        let fx = fixture(PayConfiguration::default());
        let mut service = BudgetService::new(&fx.ledger, &fx.store, &fx.engine);

        let added = service.add_expense("Rent", 500.0, ExpenseKind::Need).unwrap();
        let edited = service
            .edit_expense(added.id, |e| {
                e.set_amount(650.0);
                e.set_kind(ExpenseKind::Want);
            })
            .unwrap();

        assert_eq!(edited.amount, 650.0);
        assert_eq!(edited.kind, ExpenseKind::Want);

        let missing = service.edit_expense(ExpenseId::new(), |_| {});
        assert!(missing.unwrap_err().is_not_found());
    }
}
