use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20 {
        /// @notice Moves `amount` tokens from the caller to `to`.
        function transfer(address to, uint256 amount) external returns (bool);
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IGnarsToken {
        /// @notice Transfers `tokenId` from `from` (the treasury) to `to`.
        function safeTransferFrom(address from, address to, uint256 tokenId) external;

        /// @notice Mints reserve tokens to `numRecipients` randomly drawn holders.
        function airdrop(uint256 numRecipients) external;

        function remainingTokensInReserve() external view returns (uint256);
    }

    /// @notice Sale parameters of a Zora edition.
    ///
    /// @custom:field publicSalePrice Price per mint in wei.
    /// @custom:field maxSalePurchasePerAddress Mint cap per wallet, 0 for unlimited.
    /// @custom:field publicSaleStart Unix time the public sale opens.
    /// @custom:field publicSaleEnd Unix time the public sale closes.
    /// @custom:field presaleStart Unix time the presale opens.
    /// @custom:field presaleEnd Unix time the presale closes.
    /// @custom:field presaleMerkleRoot Allow-list root for the presale.
    #[derive(Debug, PartialEq, Eq)]
    struct SalesConfig {
        uint104 publicSalePrice;
        uint32 maxSalePurchasePerAddress;
        uint64 publicSaleStart;
        uint64 publicSaleEnd;
        uint64 presaleStart;
        uint64 presaleEnd;
        bytes32 presaleMerkleRoot;
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IZoraNFTCreator {
        /// @notice Deploys a new edition contract.
        ///
        /// @param editionSize Number of tokens, `type(uint64).max` for an open edition.
        /// @param royaltyBPS Secondary-sale royalty in basis points.
        function createEdition(
            string name,
            string symbol,
            uint64 editionSize,
            uint16 royaltyBPS,
            address payable fundsRecipient,
            address defaultAdmin,
            SalesConfig saleConfig,
            string description,
            string animationURI,
            string imageURI
        ) external returns (address);
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IGovernor {
        function propose(
            address[] targets,
            uint256[] values,
            bytes[] calldatas,
            string description
        ) external returns (bytes32);

        /// @param support 0 = Against, 1 = For, 2 = Abstain.
        function castVote(bytes32 proposalId, uint256 support) external returns (uint256);

        function castVoteWithReason(bytes32 proposalId, uint256 support, string reason)
            external
            returns (uint256);

        function queue(bytes32 proposalId) external returns (uint256);

        function execute(bytes32 proposalId) external payable returns (bytes32);

        function cancel(bytes32 proposalId) external;

        function getVotes(address account, uint256 timestamp) external view returns (uint256);

        function proposalThreshold() external view returns (uint256);
    }
}
