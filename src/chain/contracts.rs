use ethers::abi::{parse_abi, Abi, Token};
use ethers::types::{Address, Bytes};
use lazy_static::lazy_static;

use super::ChainError;
use crate::entity::{Amount, TransactionRequest};

lazy_static! {
    static ref POOL_ABI: Abi = parse_abi(&[
        "function swapAtoB(uint256 amountA)",
        "function swapBtoA(uint256 amountB)",
        "function addLiquidity(uint256 amountA, uint256 amountB)",
        "function removeLiquidity(uint256 liquidity)",
    ])
    .expect("pool ABI fragments are valid");
    static ref TOKEN_ABI: Abi =
        parse_abi(&["function approve(address spender, uint256 amount)"])
            .expect("token ABI fragments are valid");
}

/// Call builder for the liquidity pool. Token A is CLK, token B is MIR.
#[derive(Debug, Clone, Copy)]
pub struct PoolContract {
    address: Address,
}

impl PoolContract {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn swap_a_to_b(&self, amount: &Amount) -> Result<TransactionRequest, ChainError> {
        self.call("swapAtoB", &[amount])
    }

    pub fn swap_b_to_a(&self, amount: &Amount) -> Result<TransactionRequest, ChainError> {
        self.call("swapBtoA", &[amount])
    }

    pub fn add_liquidity(
        &self,
        amount_a: &Amount,
        amount_b: &Amount,
    ) -> Result<TransactionRequest, ChainError> {
        self.call("addLiquidity", &[amount_a, amount_b])
    }

    pub fn remove_liquidity(&self, amount: &Amount) -> Result<TransactionRequest, ChainError> {
        self.call("removeLiquidity", &[amount])
    }

    fn call(
        &self,
        function: &'static str,
        amounts: &[&Amount],
    ) -> Result<TransactionRequest, ChainError> {
        let tokens: Vec<Token> = amounts
            .iter()
            .map(|amount| Token::Uint(amount.base_units()))
            .collect();

        Ok(TransactionRequest {
            to: self.address,
            function,
            data: encode_call(&POOL_ABI, function, &tokens)?,
            amounts: amounts.iter().map(|amount| (*amount).clone()).collect(),
        })
    }
}

/// Call builder for an ERC-20 token used by the pool.
#[derive(Debug, Clone, Copy)]
pub struct TokenContract {
    symbol: &'static str,
    address: Address,
}

impl TokenContract {
    pub fn new(symbol: &'static str, address: Address) -> Self {
        Self { symbol, address }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn approve(
        &self,
        spender: Address,
        amount: &Amount,
    ) -> Result<TransactionRequest, ChainError> {
        let tokens = [Token::Address(spender), Token::Uint(amount.base_units())];

        Ok(TransactionRequest {
            to: self.address,
            function: "approve",
            data: encode_call(&TOKEN_ABI, "approve", &tokens)?,
            amounts: vec![amount.clone()],
        })
    }
}

fn encode_call(abi: &Abi, function: &'static str, tokens: &[Token]) -> Result<Bytes, ChainError> {
    let encoding_error = |e: ethers::abi::Error| ChainError::Encoding {
        function,
        reason: e.to_string(),
    };

    let data = abi
        .function(function)
        .map_err(encoding_error)?
        .encode_input(tokens)
        .map_err(encoding_error)?;

    Ok(Bytes::from(data))
}
