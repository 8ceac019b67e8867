use crate::array::{ArrayEntry, ArrayState, FieldArray};
use crate::check::{CheckResolution, PendingCheck};
use crate::error::{FormError, FormErrorExt};
use crate::field_error::{FieldError, FieldErrors};
use crate::path::FieldPath;
use crate::rules::{Evaluation, Rules};
use crate::state::{FieldBinding, FieldMeta, FieldStatus, FormState, SetValueOptions};
use crate::submit::{SubmitOutcome, SubmitPlan, SubmitReport};
use crate::value::display_text;
use fxhash::FxHashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use tubeform_domain::config::{FormConfig, ValidationMode};

/// Declares the fields of a [`FormController`].
pub struct FormBuilder<T> {
    defaults: T,
    fields: Vec<(String, Rules)>,
    arrays: Vec<(String, FieldArray)>,
    mode: ValidationMode,
    reset_on_success: bool,
}

impl<T: Serialize> FormBuilder<T> {
    #[must_use]
    pub fn field(mut self, path: impl Into<String>, rules: Rules) -> Self {
        self.fields.push((path.into(), rules));
        self
    }

    #[must_use]
    pub fn field_array(mut self, path: impl Into<String>, array: FieldArray) -> Self {
        self.arrays.push((path.into(), array));
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn reset_on_success(mut self, enabled: bool) -> Self {
        self.reset_on_success = enabled;
        self
    }

    /// Applies the `[form]` section of the application config.
    #[must_use]
    pub fn config(self, config: &FormConfig) -> Self {
        self.mode(config.mode).reset_on_success(config.reset_on_success)
    }

    /// # Errors
    /// * [`FormError::Decode`] if the defaults do not serialize to JSON.
    /// * [`FormError::InvalidPath`] / [`FormError::UnknownField`] for a declared path
    ///   that does not address a value of the defaults.
    /// * [`FormError::NotAnArray`] / [`FormError::ArrayBounds`] for a bad array declaration.
    pub fn build(self) -> Result<FormController<T>, FormError> {
        let defaults = serde_json::to_value(&self.defaults).context("Serializing form defaults")?;

        let mut form = FormController {
            values: defaults.clone(),
            defaults,
            rules: FxHashMap::default(),
            arrays: FxHashMap::default(),
            meta: FxHashMap::default(),
            mode: self.mode,
            reset_on_success: self.reset_on_success,
            generation: 0,
            resets: 0,
            submitting: false,
            submit_count: 0,
            submit_successful: false,
            record: PhantomData,
        };

        for (raw, array) in self.arrays {
            let path = FieldPath::parse(&raw)?;
            let state = ArrayState::new(&path, array, &form.defaults)?;
            form.arrays.insert(path, state);
        }
        for (raw, rules) in self.fields {
            form.register(&raw, rules)?;
        }

        tracing::debug!(
            fields = form.rules.len(),
            arrays = form.arrays.len(),
            mode = ?form.mode,
            "Form controller built"
        );
        Ok(form)
    }
}

impl<T> fmt::Debug for FormBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBuilder")
            .field("fields", &self.fields)
            .field("arrays", &self.arrays)
            .field("mode", &self.mode)
            .field("reset_on_success", &self.reset_on_success)
            .finish_non_exhaustive()
    }
}

/// Owns the value record of one form together with its rules and field state.
///
/// Values live in a JSON tree addressed by [`FieldPath`]; the typed record `T` is
/// only materialized on submit. Every status flag is derived from field metadata.
///
/// Asynchronous rules never run inside the controller. Operations that validate
/// return a [`PendingCheck`] which the caller awaits and hands back through
/// [`FormController::resolve`]. A write or revalidation in between makes the
/// result stale and it is dropped.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use tubeform_forms::{FormController, Rules};
///
/// #[derive(Serialize, Deserialize)]
/// struct Login { user: String }
///
/// let mut form = FormController::builder(Login { user: String::new() })
///     .field("user", Rules::new().required("User is required"))
///     .build()
///     .unwrap();
///
/// form.input("user", "").unwrap();
/// form.blur("user").unwrap();
/// assert_eq!(form.error("user").unwrap().message, "User is required");
/// ```
pub struct FormController<T> {
    defaults: Value,
    values: Value,
    rules: FxHashMap<FieldPath, Rules>,
    arrays: FxHashMap<FieldPath, ArrayState>,
    meta: FxHashMap<FieldPath, FieldMeta>,
    mode: ValidationMode,
    reset_on_success: bool,
    generation: u64,
    resets: u64,
    submitting: bool,
    submit_count: u32,
    submit_successful: bool,
    record: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for FormController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("values", &self.values)
            .field("mode", &self.mode)
            .field("generation", &self.generation)
            .field("submit_count", &self.submit_count)
            .finish_non_exhaustive()
    }
}

impl<T: Serialize> FormController<T> {
    /// Starts a form whose initial and reset values are `defaults`.
    pub fn builder(defaults: T) -> FormBuilder<T> {
        FormBuilder {
            defaults,
            fields: Vec::new(),
            arrays: Vec::new(),
            mode: ValidationMode::default(),
            reset_on_success: true,
        }
    }
}

impl<T> FormController<T> {
    /// Attaches rules to a field, replacing earlier ones.
    ///
    /// # Errors
    /// [`FormError::InvalidPath`] / [`FormError::UnknownField`] when the path does not
    /// address a value of the record.
    pub fn register(&mut self, path: &str, rules: Rules) -> Result<(), FormError> {
        let path = FieldPath::parse(path)?;
        self.lookup(&path)?;
        self.rules.insert(path, rules);
        Ok(())
    }

    /// Snapshot used to render the input bound to `path`.
    ///
    /// # Errors
    /// [`FormError::InvalidPath`] / [`FormError::UnknownField`].
    pub fn binding(&self, path: &str) -> Result<FieldBinding, FormError> {
        let path = FieldPath::parse(path)?;
        let value = self.lookup(&path)?;
        let disabled = self.disabled(&path);
        let meta = self.meta.get(&path).cloned().unwrap_or_default();
        let text = meta.raw.clone().unwrap_or_else(|| display_text(value));
        let pending = meta.status == FieldStatus::Pending;
        let error = match meta.status {
            FieldStatus::Invalid(error) if !disabled => Some(error),
            _ => None,
        };

        Ok(FieldBinding {
            name: path.to_string(),
            path,
            text,
            disabled,
            touched: meta.touched,
            dirty: meta.dirty,
            pending,
            error,
        })
    }

    /// Current value at `path`.
    ///
    /// # Errors
    /// [`FormError::InvalidPath`] / [`FormError::UnknownField`].
    pub fn value(&self, path: &str) -> Result<&Value, FormError> {
        self.lookup(&FieldPath::parse(path)?)
    }

    /// The whole record as it currently stands.
    pub const fn values(&self) -> &Value {
        &self.values
    }

    /// Values of `paths`, in request order. Never validates.
    ///
    /// # Errors
    /// Fails on the first path that does not address a value.
    pub fn get_values(&self, paths: &[&str]) -> Result<Vec<Value>, FormError> {
        paths.iter().map(|path| self.value(path).cloned()).collect()
    }

    /// `true` while the field's disabled predicate holds for the current record.
    pub fn is_disabled(&self, path: &str) -> bool {
        FieldPath::parse(path).is_ok_and(|path| self.disabled(&path))
    }

    /// Handles text typed into the input bound to `path`.
    ///
    /// The text is coerced according to the field's rules, stored, and the field is
    /// revalidated if the validation mode asks for it.
    ///
    /// # Errors
    /// [`FormError::InvalidPath`] / [`FormError::UnknownField`].
    pub fn input(&mut self, path: &str, raw: &str) -> Result<Option<PendingCheck>, FormError> {
        let path = FieldPath::parse(path)?;
        let value = self.rules_for(&path).map(Rules::coercion).unwrap_or_default().coerce(raw);
        let keep_raw = display_text(&value) != raw;
        self.write(&path, value)?;
        self.mark_dirty(&path);
        if keep_raw {
            self.meta.entry(path.clone()).or_default().raw = Some(raw.to_owned());
        }

        let touched = self.meta.get(&path).is_some_and(|meta| meta.touched);
        let validate = match self.mode {
            ValidationMode::OnChange => true,
            ValidationMode::OnBlur => touched || self.submit_count > 0,
            ValidationMode::OnSubmit => self.submit_count > 0,
        };
        Ok(if validate { self.validate(&path) } else { None })
    }

    /// Handles focus leaving the input bound to `path`.
    ///
    /// # Errors
    /// [`FormError::InvalidPath`] / [`FormError::UnknownField`].
    pub fn blur(&mut self, path: &str) -> Result<Option<PendingCheck>, FormError> {
        let path = FieldPath::parse(path)?;
        self.lookup(&path)?;
        self.meta.entry(path.clone()).or_default().touched = true;

        Ok(if self.mode == ValidationMode::OnBlur { self.validate(&path) } else { None })
    }

    /// Overwrites one field programmatically. The value is stored as given, without coercion.
    ///
    /// # Errors
    /// [`FormError::InvalidPath`] / [`FormError::UnknownField`].
    pub fn set_value(
        &mut self,
        path: &str,
        value: Value,
        options: SetValueOptions,
    ) -> Result<Option<PendingCheck>, FormError> {
        let path = FieldPath::parse(path)?;
        self.write(&path, value)?;
        self.sync_array_ids(&path);

        if options.should_dirty {
            self.mark_dirty(&path);
        }
        if options.should_touch {
            self.meta.entry(path.clone()).or_default().touched = true;
        }

        tracing::debug!(field = %path, ?options, "Value set");
        Ok(if options.should_validate { self.validate(&path) } else { None })
    }

    /// Revalidates one field now, regardless of mode.
    ///
    /// # Errors
    /// [`FormError::InvalidPath`] / [`FormError::UnknownField`].
    pub fn trigger(&mut self, path: &str) -> Result<Option<PendingCheck>, FormError> {
        let path = FieldPath::parse(path)?;
        self.lookup(&path)?;
        Ok(self.validate(&path))
    }

    /// Applies the result of an asynchronous check.
    ///
    /// Returns `false` and changes nothing when the field was written, revalidated or
    /// reset after the check was issued.
    pub fn resolve(&mut self, resolution: CheckResolution) -> bool {
        let Some(meta) = self.meta.get_mut(&resolution.path) else {
            tracing::trace!(field = %resolution.path, "Dropping check for a cleared field");
            return false;
        };
        if meta.generation != resolution.generation || meta.status != FieldStatus::Pending {
            tracing::trace!(
                field = %resolution.path,
                issued = resolution.generation,
                current = meta.generation,
                "Dropping stale check"
            );
            return false;
        }

        let path = resolution.path.clone();
        meta.status = match resolution.into_error() {
            Some(error) => {
                tracing::debug!(field = %path, kind = %error.kind, "Async check rejected value");
                FieldStatus::Invalid(error)
            },
            None => FieldStatus::Valid,
        };
        true
    }

    /// Appends `item` to the list at `array`.
    ///
    /// # Errors
    /// [`FormError::NotAnArray`] when `array` is not a declared field array.
    pub fn append(&mut self, array: &str, item: Value) -> Result<ArrayEntry, FormError> {
        let array = FieldPath::parse(array)?;
        let items = self.items_mut(&array)?;
        items.push(item);
        let index = items.len() - 1;

        let state = self.array_state_mut(&array)?;
        state.ids.push(tubeform_kernel::entry_id!());
        let entry = ArrayEntry { id: state.ids[index].clone(), index };

        self.mark_dirty(&array);
        tracing::debug!(array = %array, index, id = %entry.id, "Entry appended");
        Ok(entry)
    }

    /// Appends a copy of the array's template entry.
    ///
    /// # Errors
    /// [`FormError::NotAnArray`] when `array` is not a declared field array.
    pub fn append_default(&mut self, array: &str) -> Result<ArrayEntry, FormError> {
        let path = FieldPath::parse(array)?;
        let template = self.array_state(&path)?.template.clone();
        self.append(array, template)
    }

    /// Removes entry `index` from the list at `array`. Later entries move up and keep
    /// their ids and field state.
    ///
    /// # Errors
    /// * [`FormError::NotAnArray`] when `array` is not a declared field array.
    /// * [`FormError::ArrayBounds`] for an index past the end, or when the list is
    ///   already at its minimum length.
    pub fn remove(&mut self, array: &str, index: usize) -> Result<(), FormError> {
        let array = FieldPath::parse(array)?;
        let state = self.array_state(&array)?;
        let len = state.ids.len();
        if index >= len {
            return Err(FormError::ArrayBounds {
                message: format!("index {index} is out of range for {len} entries").into(),
                context: Some(array.to_string().into()),
            });
        }
        if len <= state.min_len {
            return Err(FormError::ArrayBounds {
                message: format!("cannot go below {} entries", state.min_len).into(),
                context: Some(array.to_string().into()),
            });
        }

        self.items_mut(&array)?.remove(index);
        self.array_state_mut(&array)?.ids.remove(index);

        let generation = self.bump();
        self.meta = std::mem::take(&mut self.meta)
            .into_iter()
            .filter_map(|(path, mut meta)| {
                let moved = path.after_removal(&array, index)?;
                // A check issued under the old path can no longer be matched.
                if moved != path && meta.status == FieldStatus::Pending {
                    meta.written(generation);
                }
                Some((moved, meta))
            })
            .collect();

        self.mark_dirty(&array);
        tracing::debug!(array = %array, index, "Entry removed");
        Ok(())
    }

    /// Entry ids of the list at `array`, in order.
    ///
    /// # Errors
    /// [`FormError::NotAnArray`] when `array` is not a declared field array.
    pub fn entries(&self, array: &str) -> Result<Vec<ArrayEntry>, FormError> {
        Ok(self.array_state(&FieldPath::parse(array)?)?.entries())
    }

    /// Current errors of every enabled field.
    pub fn errors(&self) -> FieldErrors {
        self.meta
            .iter()
            .filter_map(|(path, meta)| match &meta.status {
                FieldStatus::Invalid(error) if self.rules_for(path).is_some() && !self.disabled(path) => {
                    Some((path.clone(), error.clone()))
                },
                _ => None,
            })
            .collect()
    }

    /// Current error of one field, hidden while it is disabled.
    pub fn error(&self, path: &str) -> Option<&FieldError> {
        let path = FieldPath::parse(path).ok()?;
        match &self.meta.get(&path)?.status {
            FieldStatus::Invalid(error) if !self.disabled(&path) => Some(error),
            _ => None,
        }
    }

    /// Derived form flags.
    ///
    /// `is_valid` reruns the synchronous rules of every enabled field against the
    /// current record; fields with an asynchronous rule also need a passed check.
    pub fn state(&self) -> FormState {
        let active = self.active_paths();
        let is_valid = active.iter().all(|path| self.settled_valid(path));
        let is_validating = active
            .iter()
            .any(|path| self.meta.get(path).is_some_and(|meta| meta.status == FieldStatus::Pending));

        FormState {
            is_dirty: self.meta.values().any(|meta| meta.dirty),
            is_valid,
            is_validating,
            is_submitting: self.submitting,
            is_submitted: self.submit_count > 0 && !self.submitting,
            is_submit_successful: self.submit_successful,
            submit_count: self.submit_count,
        }
    }

    /// Restores the defaults and clears every field and submit flag. Checks still in
    /// flight become stale.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.meta.clear();
        for (path, state) in &mut self.arrays {
            let len = self.defaults.pointer(&path.pointer()).and_then(Value::as_array).map_or(0, Vec::len);
            state.regenerate(len);
        }
        self.submitting = false;
        self.submit_count = 0;
        self.submit_successful = false;
        self.resets += 1;
        self.bump();
        tracing::debug!("Form reset to defaults");
    }

    /// Validates every enabled field and collects the asynchronous checks the
    /// submission has to wait for.
    pub fn begin_submit(&mut self) -> SubmitPlan {
        self.submitting = true;
        self.submit_count += 1;
        self.submit_successful = false;

        let checks: Vec<_> = self.active_paths().iter().filter_map(|path| self.validate(path)).collect();
        tracing::debug!(attempt = self.submit_count, pending = checks.len(), "Submission started");
        SubmitPlan { checks, epoch: self.resets }
    }

    fn active_paths(&self) -> Vec<FieldPath> {
        let mut paths: Vec<FieldPath> = self.rules.keys().cloned().collect();
        for (array, state) in &self.arrays {
            paths.extend(state.item_paths(array));
        }
        paths.retain(|path| !self.disabled(path));
        paths.sort();
        paths
    }

    fn settled_valid(&self, path: &FieldPath) -> bool {
        let Some(rules) = self.rules_for(path) else { return true };
        let Ok(value) = self.lookup(path) else { return false };
        match rules.evaluate(value.clone()) {
            Evaluation::Passed => true,
            Evaluation::Failed(_) => false,
            Evaluation::Deferred { .. } => {
                self.meta.get(path).is_some_and(|meta| meta.status == FieldStatus::Valid)
            },
        }
    }

    /// Runs the synchronous rules of `path` and records the outcome. Returns the
    /// asynchronous check still to run, if any.
    fn validate(&mut self, path: &FieldPath) -> Option<PendingCheck> {
        let evaluation = self.evaluate(path);
        let generation = self.bump();
        let meta = self.meta.entry(path.clone()).or_default();
        meta.generation = generation;

        match evaluation {
            None | Some(Evaluation::Passed) => {
                meta.status = FieldStatus::Valid;
                None
            },
            Some(Evaluation::Failed(error)) => {
                tracing::trace!(field = %path, kind = %error.kind, "Field rejected");
                meta.status = FieldStatus::Invalid(error);
                None
            },
            Some(Evaluation::Deferred { rule, value }) => {
                meta.status = FieldStatus::Pending;
                Some(PendingCheck { path: path.clone(), generation, value, rule })
            },
        }
    }

    // `None` for unruled or disabled fields.
    fn evaluate(&self, path: &FieldPath) -> Option<Evaluation> {
        let rules = self.rules_for(path)?;
        if rules.is_disabled(&self.values) {
            return None;
        }
        let value = self.lookup(path).ok()?.clone();
        Some(rules.evaluate(value))
    }

    fn rules_for(&self, path: &FieldPath) -> Option<&Rules> {
        self.rules
            .get(path)
            .or_else(|| self.arrays.iter().find_map(|(array, state)| state.rules_for(array, path)))
    }

    fn disabled(&self, path: &FieldPath) -> bool {
        self.rules_for(path).is_some_and(|rules| rules.is_disabled(&self.values))
    }

    fn lookup(&self, path: &FieldPath) -> Result<&Value, FormError> {
        self.values
            .pointer(&path.pointer())
            .ok_or_else(|| FormError::UnknownField { message: path.to_string().into(), context: None })
    }

    fn write(&mut self, path: &FieldPath, value: Value) -> Result<(), FormError> {
        let slot = self
            .values
            .pointer_mut(&path.pointer())
            .ok_or_else(|| FormError::UnknownField { message: path.to_string().into(), context: None })?;
        *slot = value;

        let generation = self.bump();
        self.meta.entry(path.clone()).or_default().written(generation);
        Ok(())
    }

    // Dirty means "differs from the default"; entries appended later have no default.
    fn mark_dirty(&mut self, path: &FieldPath) {
        let pointer = path.pointer();
        let dirty = self.values.pointer(&pointer) != self.defaults.pointer(&pointer);
        self.meta.entry(path.clone()).or_default().dirty = dirty;
    }

    // A list replaced wholesale by `set_value` gets fresh ids if its length changed.
    fn sync_array_ids(&mut self, written: &FieldPath) {
        for (array, state) in &mut self.arrays {
            if !array.starts_with(written) {
                continue;
            }
            let len = self.values.pointer(&array.pointer()).and_then(Value::as_array).map_or(0, Vec::len);
            if len != state.ids.len() {
                state.regenerate(len);
                self.meta.retain(|path, _| path == array || !path.starts_with(array));
            }
        }
    }

    fn array_state(&self, array: &FieldPath) -> Result<&ArrayState, FormError> {
        self.arrays
            .get(array)
            .ok_or_else(|| FormError::NotAnArray { message: array.to_string().into(), context: None })
    }

    fn array_state_mut(&mut self, array: &FieldPath) -> Result<&mut ArrayState, FormError> {
        self.arrays
            .get_mut(array)
            .ok_or_else(|| FormError::NotAnArray { message: array.to_string().into(), context: None })
    }

    fn items_mut(&mut self, array: &FieldPath) -> Result<&mut Vec<Value>, FormError> {
        self.array_state(array)?;
        self.values
            .pointer_mut(&array.pointer())
            .and_then(Value::as_array_mut)
            .ok_or_else(|| FormError::NotAnArray { message: array.to_string().into(), context: None })
    }

    const fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

impl<T: DeserializeOwned> FormController<T> {
    /// Decodes the current record.
    ///
    /// # Errors
    /// [`FormError::Decode`] when the record no longer matches `T`, e.g. a coerced
    /// field holding `null`.
    pub fn record(&self) -> Result<T, FormError> {
        serde_json::from_value(self.values.clone()).context("Decoding form record")
    }

    /// Applies the report of a [`SubmitPlan`] and decides the submission.
    ///
    /// Fields written without validation while the plan ran are validated again
    /// synchronously. A field still waiting for an asynchronous check blocks the
    /// submission; its check stays live and is applied through [`Self::resolve`].
    /// A report made before the last [`Self::reset`] is dropped as
    /// [`SubmitOutcome::Discarded`].
    ///
    /// # Errors
    /// [`FormError::Decode`] if every field passed but the record does not decode.
    pub fn finish_submit(&mut self, report: SubmitReport) -> Result<SubmitOutcome<T>, FormError> {
        if report.epoch != self.resets {
            tracing::debug!(issued = report.epoch, current = self.resets, "Submission outlived a reset");
            return Ok(SubmitOutcome::Discarded);
        }
        for resolution in report.resolutions {
            self.resolve(resolution);
        }

        let mut unsettled = 0_usize;
        for path in self.active_paths() {
            let status = self.meta.get(&path).map(|meta| meta.status.clone()).unwrap_or_default();
            match status {
                FieldStatus::Pending => {
                    unsettled += 1;
                    tracing::debug!(field = %path, "Field still checking after submission");
                },
                FieldStatus::Unchecked => {
                    if let Some(check) = self.validate(&path) {
                        unsettled += 1;
                        tracing::debug!(field = %check.path(), "Field changed during submission");
                        if let Some(meta) = self.meta.get_mut(&path) {
                            meta.status = FieldStatus::Unchecked;
                        }
                    }
                },
                FieldStatus::Valid | FieldStatus::Invalid(_) => {},
            }
        }

        self.submitting = false;
        let errors = self.errors();
        if !errors.is_empty() || unsettled > 0 {
            self.submit_successful = false;
            tracing::debug!(errors = errors.len(), unsettled, "Submission rejected");
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let record = self.record()?;
        self.submit_successful = true;
        tracing::debug!(attempt = self.submit_count, "Submission accepted");
        if self.reset_on_success {
            self.reset();
        }
        Ok(SubmitOutcome::Accepted(record))
    }

    /// Validates the whole form, waits for asynchronous checks, then calls
    /// `on_valid` with the decoded record or `on_invalid` with the field errors.
    ///
    /// Holds the controller for the whole submission. UI code that has to keep
    /// handling input meanwhile uses [`Self::begin_submit`] and [`Self::finish_submit`].
    ///
    /// # Errors
    /// [`FormError::Decode`] if every field passed but the record does not decode.
    pub async fn submit<V, I>(&mut self, on_valid: V, on_invalid: I) -> Result<bool, FormError>
    where
        V: FnOnce(T),
        I: FnOnce(&FieldErrors),
    {
        let report = self.begin_submit().run().await;
        match self.finish_submit(report)? {
            SubmitOutcome::Accepted(record) => {
                on_valid(record);
                Ok(true)
            },
            SubmitOutcome::Rejected(errors) => {
                on_invalid(&errors);
                Ok(false)
            },
            SubmitOutcome::Discarded => Ok(false),
        }
    }
}
