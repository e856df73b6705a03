use crate::error::{Error, ErrorKind, Result};
use crate::fallback::find_taught_spell;
use crate::spell_info::resolve_spell_info;
use crate::template::{Placeholders, RenameTemplate};
use derive_more::Display;
use exn::ResultExt;
use spelltome_loadorder::{LoadOrder, Patch, WinningContext};
use spelltome_records::models::{Book, FormKey};
use spelltome_records::{BETTER_SPELL_LEARNING, SPELL_TOME_KEYWORD};
use std::collections::HashMap;
use tracing::instrument;

/// Why a book was left alone. None of these are failures.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    #[display("book has no name")]
    Unnamed,
    #[display("book is not a spell tome")]
    NotSpellTome,
    #[display("taught spell not found")]
    NoSpell,
    #[display("taught spell has no name")]
    UnnamedSpell,
    #[display("school and level could not be determined")]
    NoSpellInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub form_key: FormKey,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOutcome {
    Renamed(Rename),
    Skipped(SkipReason),
}

/// Everything that happened during a [`run`].
#[derive(Debug, Default)]
pub struct PatchReport {
    /// Renamed books, in load order priority.
    pub renamed: Vec<Rename>,
    pub skipped: HashMap<SkipReason, u64>,
    /// Books that failed to patch, each wrapped in [`ErrorKind::Record`].
    pub failures: Vec<Error>,
}
impl PatchReport {
    pub fn skipped(&self, reason: SkipReason) -> u64 {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_skipped(&self) -> u64 {
        self.skipped.values().sum()
    }
}

/// Renames every spell tome in `load_order`, writing overrides into `patch`.
///
/// Each book is handled on its own: a failure is logged, recorded in the
/// returned [`PatchReport`], and the run moves on to the next book.
pub fn run<L: LoadOrder + ?Sized>(load_order: &L, template: &RenameTemplate, patch: &mut Patch) -> PatchReport {
    let use_script_fallback = load_order.has_mod(&BETTER_SPELL_LEARNING);
    if use_script_fallback {
        tracing::info!(plugin = %BETTER_SPELL_LEARNING, "Looking up spells through tome scripts where books lack a spell link");
    }

    let mut report = PatchReport::default();
    for ctx in load_order.winning_books() {
        let plugin = ctx.mod_key();
        let form_key = ctx.form_key();
        match patch_book(ctx, load_order, template, use_script_fallback, patch) {
            Ok(BookOutcome::Renamed(rename)) => report.renamed.push(rename),
            Ok(BookOutcome::Skipped(reason)) => {
                tracing::trace!(%form_key, %reason, "Skipped book");
                *report.skipped.entry(reason).or_default() += 1;
            },
            Err(err) => {
                let err = err.raise(ErrorKind::Record {
                    plugin: plugin.clone(),
                    form_key: form_key.clone(),
                });
                tracing::error!(error = ?err, "Failed to patch book");
                report.failures.push(err);
            },
        }
    }

    tracing::info!(
        renamed = report.renamed.len(),
        skipped = report.total_skipped(),
        failed = report.failures.len(),
        "Finished renaming spell tomes"
    );
    report
}

/// Renames a single book, if it is a spell tome whose spell can be found.
#[instrument(level = "debug", skip_all, fields(form_key = %ctx.form_key()))]
pub fn patch_book<L: LoadOrder + ?Sized>(
    ctx: WinningContext<'_, Book>,
    load_order: &L,
    template: &RenameTemplate,
    use_script_fallback: bool,
    patch: &mut Patch,
) -> Result<BookOutcome> {
    let book = ctx.into_record().or_raise(|| ErrorKind::LoadOrder)?;
    let Some(old_name) = book.name.as_deref() else {
        return Ok(BookOutcome::Skipped(SkipReason::Unnamed));
    };
    if !book.has_keyword(&SPELL_TOME_KEYWORD) {
        return Ok(BookOutcome::Skipped(SkipReason::NotSpellTome));
    }

    let spell = match book.taught_spell().and_then(|key| load_order.spell(key)) {
        Some(spell) => Some(spell),
        None if use_script_fallback => find_taught_spell(&book, load_order),
        None => None,
    };
    let Some(spell) = spell else {
        return Ok(BookOutcome::Skipped(SkipReason::NoSpell));
    };
    let Some(spell_name) = spell.name.as_deref() else {
        return Ok(BookOutcome::Skipped(SkipReason::UnnamedSpell));
    };

    let (level, school) = match template.requires_spell_info() {
        false => ("", ""),
        true => match resolve_spell_info(spell, load_order) {
            Some(info) => (info.level_name(), info.school_name()),
            None => {
                tracing::info!(book = old_name, "Cannot determine school and level for book");
                return Ok(BookOutcome::Skipped(SkipReason::NoSpellInfo));
            },
        },
    };
    let new_name = template.render(&Placeholders {
        level,
        school,
        spell: spell_name,
        plugin: book.source_plugin().name(),
    });

    tracing::info!("{old_name} -> {new_name}");
    let rename = Rename {
        form_key: book.form_key.clone(),
        from: old_name.to_string(),
        to: new_name.clone(),
    };
    patch.get_or_add_override(&book).name = Some(new_name);
    Ok(BookOutcome::Renamed(rename))
}
