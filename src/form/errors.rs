use std::collections::BTreeMap;
use std::fmt;

/// Top-level text fields of a recipe draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecipeField {
    Title,
    Description,
    Instructions,
    Photo,
}

impl RecipeField {
    pub const ALL: [RecipeField; 4] = [
        RecipeField::Title,
        RecipeField::Description,
        RecipeField::Instructions,
        RecipeField::Photo,
    ];

    /// Field name as used in the API payload
    pub fn name(&self) -> &'static str {
        match self {
            RecipeField::Title => "title",
            RecipeField::Description => "description",
            RecipeField::Instructions => "instructions",
            RecipeField::Photo => "photo",
        }
    }
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields of one ingredient row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IngredientField {
    Ingredient,
    Amount,
    UnitOfMeasure,
}

impl IngredientField {
    pub const ALL: [IngredientField; 3] = [
        IngredientField::Ingredient,
        IngredientField::Amount,
        IngredientField::UnitOfMeasure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IngredientField::Ingredient => "ingredient",
            IngredientField::Amount => "amount",
            IngredientField::UnitOfMeasure => "unitOfMeasure",
        }
    }
}

impl fmt::Display for IngredientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation and submission errors of a recipe form.
///
/// Ingredient errors are keyed by row, so two rows with the same bad field
/// both keep their message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<RecipeField, String>,
    ingredients: BTreeMap<(usize, IngredientField), String>,
    form: Option<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.ingredients.clear();
        self.form = None;
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.ingredients.is_empty() && self.form.is_none()
    }

    /// Number of recorded messages, the form-level one included
    pub fn len(&self) -> usize {
        self.fields.len() + self.ingredients.len() + usize::from(self.form.is_some())
    }

    pub fn set_field(&mut self, field: RecipeField, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn set_ingredient(
        &mut self,
        index: usize,
        field: IngredientField,
        message: impl Into<String>,
    ) {
        self.ingredients.insert((index, field), message.into());
    }

    pub fn set_form(&mut self, message: impl Into<String>) {
        self.form = Some(message.into());
    }

    pub fn field(&self, field: RecipeField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn ingredient(&self, index: usize, field: IngredientField) -> Option<&str> {
        self.ingredients.get(&(index, field)).map(String::as_str)
    }

    /// Upload or service failure from the last submit, if any
    pub fn form(&self) -> Option<&str> {
        self.form.as_deref()
    }

    /// All errors of one ingredient row, in field order
    pub fn row(&self, index: usize) -> impl Iterator<Item = (IngredientField, &str)> + '_ {
        self.ingredients
            .range((index, IngredientField::Ingredient)..=(index, IngredientField::UnitOfMeasure))
            .map(|((_, field), message)| (*field, message.as_str()))
    }

    /// Every message as a `(label, message)` pair, e.g. `("ingredients[1].amount", ...)`
    pub fn messages(&self) -> Vec<(String, String)> {
        let fields = self
            .fields
            .iter()
            .map(|(field, message)| (field.name().to_string(), message.clone()));
        let ingredients = self.ingredients.iter().map(|((index, field), message)| {
            (format!("ingredients[{}].{}", index, field), message.clone())
        });
        let form = self
            .form
            .iter()
            .map(|message| ("form".to_string(), message.clone()));

        fields.chain(ingredients).chain(form).collect()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, message) in self.messages() {
            writeln!(f, "{}: {}", label, message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_do_not_overwrite_each_other() {
        let mut errors = FormErrors::new();
        errors.set_ingredient(0, IngredientField::Amount, "too long");
        errors.set_ingredient(1, IngredientField::Amount, "required");

        assert_eq!(errors.ingredient(0, IngredientField::Amount), Some("too long"));
        assert_eq!(errors.ingredient(1, IngredientField::Amount), Some("required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_row_iterates_only_its_index() {
        let mut errors = FormErrors::new();
        errors.set_ingredient(0, IngredientField::Ingredient, "a");
        errors.set_ingredient(1, IngredientField::UnitOfMeasure, "b");
        errors.set_ingredient(1, IngredientField::Ingredient, "c");

        let row: Vec<_> = errors.row(1).collect();
        assert_eq!(
            row,
            vec![
                (IngredientField::Ingredient, "c"),
                (IngredientField::UnitOfMeasure, "b")
            ]
        );
    }

    #[test]
    fn test_clear_and_messages() {
        let mut errors = FormErrors::new();
        errors.set_field(RecipeField::Title, "required");
        errors.set_ingredient(2, IngredientField::Amount, "too long");
        errors.set_form("service down");

        let messages = errors.messages();
        assert_eq!(messages[0], ("title".to_string(), "required".to_string()));
        assert_eq!(messages[1].0, "ingredients[2].amount");
        assert_eq!(messages[2].0, "form");
        assert_eq!(errors.len(), 3);

        errors.clear();
        assert!(errors.is_empty());
    }
}
