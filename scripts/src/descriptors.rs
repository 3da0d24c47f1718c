//! The deployment descriptor registry and execution planner.
//!
//! A descriptor is a declarative unit of "deploy these contracts under
//! these aliases". Descriptors carry tags by which they can be selected,
//! and dependencies (tags) that must execute first. The planner resolves
//! a tag selection into a dependency-ordered execution sequence.

use std::collections::HashMap;

use ethers::abi::Token;

use crate::{
    constants::{
        MOCKS_TAG, MOCK_ERC20_ABI, MOCK_ERC20_BYTECODE, OTC_SWAP_ABI, OTC_SWAP_BYTECODE,
        OTC_SWAP_CONTRACT_KEY, OTC_SWAP_TAG, TEST_TOKEN1_CONTRACT_KEY, TEST_TOKEN2_CONTRACT_KEY,
    },
    errors::ScriptError,
};

/// A single aliased contract deployment requested by a descriptor
pub struct ContractDeployment {
    /// The alias under which the deployment is recorded
    pub alias: &'static str,
    /// The JSON ABI of the compiled contract
    pub abi: &'static str,
    /// The hex-encoded deployment bytecode of the compiled contract
    pub bytecode: &'static str,
    /// The ABI-tokenized constructor arguments
    pub constructor_args: Vec<Token>,
}

/// A deployment descriptor
pub struct Descriptor {
    /// The name of the descriptor, used in logs and planning errors
    pub name: &'static str,
    /// The tags by which the descriptor can be selected
    pub tags: &'static [&'static str],
    /// The tags of descriptors that must execute before this one
    pub dependencies: &'static [&'static str],
    /// Whether the descriptor body is skipped on a prod-tagged network
    pub skip_on_prod: bool,
    /// The contract deployments the descriptor requests
    pub deployments: fn() -> Vec<ContractDeployment>,
}

/// Returns the registry of deployment descriptors
pub fn registry() -> Vec<Descriptor> {
    vec![
        Descriptor {
            name: "mocks",
            tags: &[MOCKS_TAG],
            dependencies: &[],
            skip_on_prod: true,
            deployments: mock_token_deployments,
        },
        Descriptor {
            name: "otc-swap",
            tags: &[OTC_SWAP_TAG],
            dependencies: &[MOCKS_TAG],
            skip_on_prod: false,
            deployments: otc_swap_deployments,
        },
    ]
}

/// The two mock ERC20 token deployments
fn mock_token_deployments() -> Vec<ContractDeployment> {
    vec![
        ContractDeployment {
            alias: TEST_TOKEN1_CONTRACT_KEY,
            abi: MOCK_ERC20_ABI,
            bytecode: MOCK_ERC20_BYTECODE,
            constructor_args: vec![
                Token::String("TestToken1".to_string()),
                Token::String("TT1".to_string()),
            ],
        },
        ContractDeployment {
            alias: TEST_TOKEN2_CONTRACT_KEY,
            abi: MOCK_ERC20_ABI,
            bytecode: MOCK_ERC20_BYTECODE,
            constructor_args: vec![
                Token::String("TestToken2".to_string()),
                Token::String("TT2".to_string()),
            ],
        },
    ]
}

/// The OTCSwap contract deployment
fn otc_swap_deployments() -> Vec<ContractDeployment> {
    vec![ContractDeployment {
        alias: OTC_SWAP_CONTRACT_KEY,
        abi: OTC_SWAP_ABI,
        bytecode: OTC_SWAP_BYTECODE,
        constructor_args: vec![],
    }]
}

/// The visitation state of a descriptor during the planning walk
#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    /// Not yet reached
    Unvisited,
    /// On the current walk path; reaching it again means a cycle
    Visiting,
    /// Fully planned
    Visited,
}

/// Plans an execution order over the registry.
///
/// Selects the descriptors matching any of the requested tags (all
/// descriptors when no tags are requested), pulls in their dependencies
/// transitively, and returns registry indices ordered so that every
/// descriptor's dependencies precede it.
pub fn plan(
    registry: &[Descriptor],
    requested_tags: Option<&[String]>,
) -> Result<Vec<usize>, ScriptError> {
    let mut descriptors_by_tag: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, descriptor) in registry.iter().enumerate() {
        for &tag in descriptor.tags {
            descriptors_by_tag.entry(tag).or_default().push(idx);
        }
    }

    let roots = match requested_tags {
        Some(tags) => {
            let mut roots = Vec::new();
            for tag in tags {
                let indices = descriptors_by_tag.get(tag.as_str()).ok_or_else(|| {
                    ScriptError::DescriptorPlanning(format!("no descriptor tagged `{}`", tag))
                })?;
                roots.extend_from_slice(indices);
            }
            roots
        }
        None => (0..registry.len()).collect(),
    };

    let mut states = vec![VisitState::Unvisited; registry.len()];
    let mut order = Vec::new();
    for root in roots {
        visit(registry, &descriptors_by_tag, root, &mut states, &mut order)?;
    }

    Ok(order)
}

/// Appends the given descriptor to the plan, dependencies first
fn visit(
    registry: &[Descriptor],
    descriptors_by_tag: &HashMap<&str, Vec<usize>>,
    idx: usize,
    states: &mut [VisitState],
    order: &mut Vec<usize>,
) -> Result<(), ScriptError> {
    match states[idx] {
        VisitState::Visited => return Ok(()),
        VisitState::Visiting => {
            return Err(ScriptError::DescriptorPlanning(format!(
                "dependency cycle through descriptor `{}`",
                registry[idx].name
            )))
        }
        VisitState::Unvisited => {}
    }

    states[idx] = VisitState::Visiting;
    for &dep_tag in registry[idx].dependencies {
        let dep_indices = descriptors_by_tag.get(dep_tag).ok_or_else(|| {
            ScriptError::DescriptorPlanning(format!(
                "descriptor `{}` depends on unknown tag `{}`",
                registry[idx].name, dep_tag
            ))
        })?;
        for &dep_idx in dep_indices {
            visit(registry, descriptors_by_tag, dep_idx, states, order)?;
        }
    }
    states[idx] = VisitState::Visited;
    order.push(idx);

    Ok(())
}
