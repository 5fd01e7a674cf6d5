//! Add-member form: draft state, validation and the submit command.

use std::any::Any;

use log::{debug, error, info};
use roster_states::{Command, CommandFuture, CommandSnapshot, State, Updater, done};
use thiserror::Error;

use crate::config::StoreConfig;
use crate::store::TeamStore;
use crate::team::{LoadRosterCommand, NewTeamMember, Role};
use crate::toast::{notify_error, notify_success};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemberFormError {
    #[error("Please fill in name and role")]
    MissingRequired,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberForm {
    pub visible: bool,
    pub category: Role,
    pub name: String,
    pub email: String,
    pub mobile: String,
    /// Empty until one of `category.responsibilities()` is picked.
    pub responsibilities: String,
    /// Empty until a shift is picked. Ignored for officials.
    pub shift: String,
    pub submitting: bool,
}

impl MemberForm {
    /// Options for the responsibility selector.
    pub fn responsibility_options(&self) -> &'static [&'static str] {
        self.category.responsibilities()
    }

    pub fn select_category(&mut self, category: Role) {
        self.category = category;
        if !category
            .responsibilities()
            .contains(&self.responsibilities.as_str())
        {
            self.responsibilities.clear();
        }
    }

    pub fn validate(&self) -> Result<(), MemberFormError> {
        if self.name.trim().is_empty() || self.responsibilities.trim().is_empty() {
            return Err(MemberFormError::MissingRequired);
        }
        Ok(())
    }

    /// Insert payload for the current draft.
    pub fn to_insert(&self) -> Result<NewTeamMember, MemberFormError> {
        self.validate()?;

        let shift_details = match self.category {
            Role::Official => None,
            Role::Volunteer => optional(&self.shift),
        };

        Ok(NewTeamMember {
            name: self.name.trim().to_owned(),
            email: optional(&self.email),
            mobile: optional(&self.mobile),
            responsibilities: self.responsibilities.clone(),
            shift_details,
            role: self.category,
        })
    }

    /// Clear the draft and hide the form. The category stays selected.
    pub fn reset(&mut self) {
        *self = Self {
            category: self.category,
            ..Self::default()
        };
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl State for MemberForm {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

/// Category picked in the form header, read by [`SelectCategoryCommand`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberFormInput {
    pub category: Role,
}

impl State for MemberFormInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }
}

#[derive(Default)]
pub struct ToggleMemberFormCommand;

impl Command for ToggleMemberFormCommand {
    fn run(&self, _snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        updater.update::<MemberForm>(|form| form.visible = !form.visible);
        done()
    }
}

/// Hide the form and keep the draft.
#[derive(Default)]
pub struct CancelMemberFormCommand;

impl Command for CancelMemberFormCommand {
    fn run(&self, _snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        updater.update::<MemberForm>(|form| form.visible = false);
        done()
    }
}

#[derive(Default)]
pub struct SelectCategoryCommand;

impl Command for SelectCategoryCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let category = snap.state::<MemberFormInput>().category;
        updater.update::<MemberForm>(move |form| form.select_category(category));
        done()
    }
}

/// Validate the draft, insert it, then reload the roster.
#[derive(Default)]
pub struct SubmitMemberCommand;

impl Command for SubmitMemberCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let form = snap.state::<MemberForm>();
        if form.submitting {
            debug!("Member submission already in flight, skipping");
            return done();
        }

        let payload = match form.to_insert() {
            Ok(payload) => payload,
            Err(err) => {
                notify_error(&updater, err.to_string());
                return done();
            }
        };

        let store = TeamStore::new(snap.state::<StoreConfig>().clone());
        updater.update::<MemberForm>(|form| form.submitting = true);

        Box::pin(async move {
            match store.insert_member(&payload).await {
                Ok(()) => {
                    info!("Added {} as {}", payload.name, payload.role);
                    notify_success(&updater, "Team member added successfully");
                    updater.update::<MemberForm>(MemberForm::reset);
                    updater.dispatch::<LoadRosterCommand>();
                }
                Err(err) => {
                    error!("Failed to add team member: {err}");
                    notify_error(&updater, "Failed to add team member");
                    updater.update::<MemberForm>(|form| form.submitting = false);
                }
            }
        })
    }
}
