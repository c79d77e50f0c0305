//! CLI tool for deploying and administering the lending ledger.

use token_lending_contracts::ledger::LendingAndBorrowing;
use token_lending_contracts::token::FaucetToken;
use odra::prelude::{Address, Addressable};
use odra::host::{HostEnv, NoArgs};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Deploys the LendingAndBorrowing contract. The deployer becomes admin.
pub struct LedgerDeployScript;

impl DeployScript for LedgerDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        let ledger = LendingAndBorrowing::load_or_deploy(
            &env,
            NoArgs,
            container,
            400_000_000_000 // Gas limit for ledger deployment
        )?;

        println!("LendingAndBorrowing deployed to: {:?}", ledger.address());
        Ok(())
    }
}

/// Deploys a faucet token to use as collateral on test networks.
pub struct CollateralTokenDeployScript;

impl DeployScript for CollateralTokenDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use token_lending_contracts::token::FaucetTokenInitArgs;

        let token = FaucetToken::load_or_deploy(
            &env,
            FaucetTokenInitArgs {
                name: String::from("Collateral Token"),
                symbol: String::from("CLT"),
                decimals: 18,
            },
            container,
            300_000_000_000
        )?;

        println!("Collateral token deployed to: {:?}", token.address());
        Ok(())
    }
}

/// Deploys the ledger and a collateral token, then wires them together.
pub struct MarketDeployScript;

impl DeployScript for MarketDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        LedgerDeployScript.deploy(env, container)?;
        CollateralTokenDeployScript.deploy(env, container)?;

        let token = container.contract_ref::<FaucetToken>(env)?;
        let mut ledger = container.contract_ref::<LendingAndBorrowing>(env)?;
        env.set_gas(50_000_000_000);
        ledger.set_collateral_token(token.address().clone());

        Ok(())
    }
}

fn token_args() -> Vec<CommandArg> {
    vec![
        CommandArg::new(
            "name",
            "Display name of the token",
            NamedCLType::String,
        ),
        CommandArg::new(
            "token",
            "Address of the CEP-18 token",
            NamedCLType::Key,
        ),
    ]
}

/// Scenario to list a token for lending.
pub struct AddLendingTokenScenario;

impl Scenario for AddLendingTokenScenario {
    fn args(&self) -> Vec<CommandArg> {
        token_args()
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut ledger = container.contract_ref::<LendingAndBorrowing>(env)?;
        let name = args.get_single::<String>("name")?;
        let token = args.get_single::<Address>("token")?;

        env.set_gas(50_000_000_000);
        ledger.try_add_tokens_for_lending(name, token)?;

        println!("Token listed for lending");
        Ok(())
    }
}

impl ScenarioMetadata for AddLendingTokenScenario {
    const NAME: &'static str = "add-lending-token";
    const DESCRIPTION: &'static str = "Lists a token that suppliers may lend";
}

/// Scenario to list a token for borrowing.
pub struct AddBorrowingTokenScenario;

impl Scenario for AddBorrowingTokenScenario {
    fn args(&self) -> Vec<CommandArg> {
        token_args()
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut ledger = container.contract_ref::<LendingAndBorrowing>(env)?;
        let name = args.get_single::<String>("name")?;
        let token = args.get_single::<Address>("token")?;

        env.set_gas(50_000_000_000);
        ledger.try_add_tokens_for_borrowing(name, token)?;

        println!("Token listed for borrowing");
        Ok(())
    }
}

impl ScenarioMetadata for AddBorrowingTokenScenario {
    const NAME: &'static str = "add-borrowing-token";
    const DESCRIPTION: &'static str = "Lists a token that borrowers may draw";
}

/// Scenario to point the ledger at a collateral token.
pub struct SetCollateralTokenScenario;

impl Scenario for SetCollateralTokenScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "token",
            "Address of the CEP-18 collateral token",
            NamedCLType::Key,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut ledger = container.contract_ref::<LendingAndBorrowing>(env)?;
        let token = args.get_single::<Address>("token")?;

        env.set_gas(50_000_000_000);
        ledger.try_set_collateral_token(token)?;

        println!("Collateral token set");
        Ok(())
    }
}

impl ScenarioMetadata for SetCollateralTokenScenario {
    const NAME: &'static str = "set-collateral-token";
    const DESCRIPTION: &'static str = "Sets the single collateral token for all borrowers";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the token lending ledger")
        // Deploy scripts
        .deploy(LedgerDeployScript)
        .deploy(CollateralTokenDeployScript)
        .deploy(MarketDeployScript)
        // Contract references
        .contract::<LendingAndBorrowing>()
        .contract::<FaucetToken>()
        // Scenarios
        .scenario(AddLendingTokenScenario)
        .scenario(AddBorrowingTokenScenario)
        .scenario(SetCollateralTokenScenario)
        .build()
        .run();
}
