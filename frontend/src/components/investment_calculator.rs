use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{INVESTMENT_MAX, INVESTMENT_MIN};
use crate::lending::{Investment, PAINTING_EXAMPLE};

#[function_component(InvestmentCalculator)]
pub fn investment_calculator() -> Html {
    let investment = use_state(Investment::default);

    let oninput = {
        let investment = investment.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // Keep the last good amount if the browser hands us something odd
            if let Some(next) = Investment::from_slider(&input.value()) {
                investment.set(next);
            }
        })
    };

    html! {
        <div class="calculator-section">
            <style>
                {r#"
                    .calculator-section {
                        background: rgba(255, 255, 255, 0.05);
                        border: 2px solid var(--gold);
                        border-radius: 20px;
                        padding: 3rem;
                        text-align: center;
                    }
                    .calculator-title {
                        font-family: 'Playfair Display', serif;
                        font-size: 2rem;
                        color: var(--gold);
                        margin-bottom: 2rem;
                    }
                    .calculator-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }
                    .calculator-card {
                        background: rgba(255, 255, 255, 0.08);
                        border-radius: 12px;
                        padding: 1.5rem;
                    }
                    .calculator-label {
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.7);
                        text-transform: uppercase;
                        letter-spacing: 1px;
                        margin-bottom: 0.5rem;
                    }
                    .calculator-value {
                        font-family: 'Playfair Display', serif;
                        font-size: 2rem;
                        font-weight: 700;
                        color: var(--teal);
                    }
                    .slider-container {
                        max-width: 600px;
                        margin: 0 auto;
                    }
                    .slider-label {
                        display: block;
                        font-size: 1.2rem;
                        font-weight: 600;
                        margin-bottom: 1.5rem;
                    }
                    .slider {
                        width: 100%;
                        height: 8px;
                        border-radius: 4px;
                        background: linear-gradient(to right, var(--teal), var(--gold));
                        outline: none;
                        -webkit-appearance: none;
                        appearance: none;
                    }
                    .slider::-webkit-slider-thumb {
                        -webkit-appearance: none;
                        width: 24px;
                        height: 24px;
                        border-radius: 50%;
                        background: var(--gold);
                        border: 3px solid var(--white);
                        cursor: pointer;
                    }
                    .slider::-moz-range-thumb {
                        width: 24px;
                        height: 24px;
                        border-radius: 50%;
                        background: var(--gold);
                        border: 3px solid var(--white);
                        cursor: pointer;
                    }
                "#}
            </style>
            <h3 class="calculator-title">{"Danny's Painting Example"}</h3>
            <div class="calculator-grid">
                { for PAINTING_EXAMPLE.iter().map(|(label, value)| html! {
                    <div class="calculator-card">
                        <div class="calculator-label">{*label}</div>
                        <div class="calculator-value">{*value}</div>
                    </div>
                }) }
            </div>
            <div class="slider-container">
                <label class="slider-label" for="investment-slider">
                    {investment.summary()}
                </label>
                <input
                    id="investment-slider"
                    class="slider"
                    type="range"
                    min={INVESTMENT_MIN.to_string()}
                    max={INVESTMENT_MAX.to_string()}
                    value={investment.amount().to_string()}
                    {oninput}
                />
            </div>
        </div>
    }
}
