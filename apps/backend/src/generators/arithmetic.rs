//! Procedurally generated arithmetic exercises.

use async_trait::async_trait;
use rand::Rng;

use cardquiz_core::{check_answer, GeneratedCard, Op};

use super::{CardGenerator, GeneratorError};
use crate::models::Collection;
use crate::store::CardStore;

/// Deals `a <op> b` exercises with both operands drawn uniformly from
/// 1..=10. The exercise is encoded in the card id (`"3+5"`), so checking
/// recomputes the answer from the id alone; nothing is stored.
///
/// One instance per operator is registered, each under the generator name
/// collections reference.
pub struct ArithmeticCardGenerator {
    op: Op,
}

impl ArithmeticCardGenerator {
    pub fn addition() -> Self {
        Self { op: Op::Add }
    }

    pub fn multiplication() -> Self {
        Self { op: Op::Mul }
    }

    pub fn division() -> Self {
        Self { op: Op::Div }
    }
}

#[async_trait]
impl CardGenerator for ArithmeticCardGenerator {
    fn name(&self) -> &'static str {
        match self.op {
            Op::Add => "SimpleAdditionCardGenerator",
            Op::Mul => "SimpleMultiplicationCardGenerator",
            Op::Div => "SimpleDivisionCardGenerator",
        }
    }

    async fn get_card(
        &self,
        _store: &dyn CardStore,
        _collection: &Collection,
    ) -> Result<GeneratedCard, GeneratorError> {
        let mut rng = rand::thread_rng();
        let lhs = rng.gen_range(1..=10);
        let rhs = rng.gen_range(1..=10);

        Ok(GeneratedCard::new(
            self.op.identifier(lhs, rhs),
            self.op.question(lhs, rhs),
        ))
    }

    async fn check_card(
        &self,
        _store: &dyn CardStore,
        _collection: &Collection,
        card_id: &str,
        answer: &str,
    ) -> Result<bool, GeneratorError> {
        Ok(check_answer(card_id, answer)?)
    }
}
