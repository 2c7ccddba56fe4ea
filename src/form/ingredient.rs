use crate::form::IngredientField;
use crate::model::IngredientDraft;

/// Controlled handle onto one ingredient of a form.
///
/// Holds the whole ingredient list but only ever writes to `index`.
pub struct IngredientRow<'a> {
    ingredients: &'a mut [IngredientDraft],
    index: usize,
}

impl<'a> IngredientRow<'a> {
    pub(crate) fn new(ingredients: &'a mut [IngredientDraft], index: usize) -> Option<Self> {
        (index < ingredients.len()).then_some(IngredientRow { ingredients, index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn draft(&self) -> &IngredientDraft {
        &self.ingredients[self.index]
    }

    pub fn get(&self, field: IngredientField) -> &str {
        let draft = self.draft();
        match field {
            IngredientField::Ingredient => &draft.ingredient,
            IngredientField::Amount => &draft.amount,
            IngredientField::UnitOfMeasure => &draft.unit_of_measure,
        }
    }

    pub fn set(&mut self, field: IngredientField, value: impl Into<String>) {
        let draft = &mut self.ingredients[self.index];
        let slot = match field {
            IngredientField::Ingredient => &mut draft.ingredient,
            IngredientField::Amount => &mut draft.amount,
            IngredientField::UnitOfMeasure => &mut draft.unit_of_measure,
        };
        *slot = value.into();
    }

    pub fn set_ingredient(&mut self, value: impl Into<String>) {
        self.set(IngredientField::Ingredient, value);
    }

    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.set(IngredientField::Amount, value);
    }

    pub fn set_unit_of_measure(&mut self, value: impl Into<String>) {
        self.set(IngredientField::UnitOfMeasure, value);
    }
}
