//! ABI bindings of the contracts a settlement interacts with.

use {crate::domain::eth, alloy_primitives::address};

alloy_sol_types::sol! {
    /// The CoW Protocol settlement contract.
    ///
    /// https://github.com/cowprotocol/contracts/blob/v1.0.0/src/contracts/GPv2Settlement.sol
    interface GPv2Settlement {
        struct Trade {
            uint256 sellTokenIndex;
            uint256 buyTokenIndex;
            address receiver;
            uint256 sellAmount;
            uint256 buyAmount;
            uint32 validTo;
            bytes32 appData;
            uint256 feeAmount;
            uint256 flags;
            uint256 executedAmount;
            bytes signature;
        }

        struct Interaction {
            address target;
            uint256 value;
            bytes callData;
        }

        function settle(
            address[] tokens,
            uint256[] clearingPrices,
            Trade[] trades,
            Interaction[][3] interactions
        ) external;
    }

    interface ERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
    }

    interface UniswapV2Router {
        function swapExactTokensForTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] path,
            address to,
            uint256 deadline
        ) external returns (uint256[] amounts);
    }
}

/// Address of the settlement contract, identical on all supported chains.
pub const SETTLEMENT: eth::ContractAddress =
    eth::ContractAddress(address!("9008D19f58AAbD9eD0D60971565AA8510560ab41"));
