use {
    crate::domain::solution,
    solvers_dto::solution as dto,
};

/// Creates a new solution DTO from its domain object.
pub fn from_domain(candidates: &[solution::Candidate]) -> dto::Solutions {
    dto::Solutions {
        solutions: candidates
            .iter()
            .map(|candidate| dto::Solution {
                id: candidate.id.0,
                prices: candidate
                    .solution
                    .prices
                    .0
                    .iter()
                    .map(|(token, price)| (token.0, *price))
                    .collect(),
                trades: candidate
                    .solution
                    .trades
                    .iter()
                    .map(|trade| {
                        dto::Trade::Fulfillment(dto::Fulfillment {
                            order: dto::OrderUid(trade.order().uid.0),
                            executed_amount: trade.executed(),
                            fee: None,
                        })
                    })
                    .collect(),
                interactions: candidate
                    .solution
                    .interactions
                    .iter()
                    .map(|interaction| {
                        dto::Interaction::Liquidity(dto::LiquidityInteraction {
                            internalize: interaction.internalize,
                            id: interaction.liquidity.id.0.clone(),
                            input_token: interaction.input.token.0,
                            output_token: interaction.output.token.0,
                            input_amount: interaction.input.amount,
                            output_amount: interaction.output.amount,
                        })
                    })
                    .collect(),
                gas: candidate.solution.gas.map(|gas| gas.0),
            })
            .collect(),
    }
}
