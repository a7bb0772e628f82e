//! Rendering of the per-pool payload contract.

use serde::Serialize;
use stewgen_core::{GenError, GenResult, Options, Pool, PoolConfig};
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "proposal.sol";

const PROPOSAL_TEMPLATE: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.0;

{% for line in imports -%}
{{ line }}
{% endfor %}
/**
 * @title {{ title }}
 * @author {{ author }}
 * - discussion: {{ discussion }}
 * - deploy-command: make run-script contract=src/contracts/updates/{{ folder }}/{{ contract }}.sol:{{ contract }} network={{ network }} broadcast=false generate_diff=true
 */
contract {{ contract }} is {{ base_contract }} {
  function name() public pure override returns (string memory) {
    return '{{ contract }}';
  }
{% for code in functions %}
{{ code }}
{% endfor -%}
}
"#;

#[derive(Serialize)]
struct ProposalView<'a> {
    imports: Vec<String>,
    title: String,
    author: String,
    discussion: String,
    folder: String,
    contract: String,
    network: String,
    base_contract: String,
    functions: Vec<&'a str>,
}

/// Doc comment text: `TODO` when empty, and never closing the comment early.
fn comment_text(value: &str) -> String {
    if value.is_empty() {
        "TODO".to_string()
    } else {
        value.replace("*/", "*\\/")
    }
}

/// Name of the RiskStewards base script for `pool`.
pub fn base_contract(pool: Pool) -> String {
    format!("RiskStewards{}", pool.steward_network())
}

/// Compiled contract template.
pub struct ProposalRenderer {
    tera: Tera,
}

impl ProposalRenderer {
    pub fn new() -> GenResult<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, PROPOSAL_TEMPLATE)
            .map_err(|e| GenError::Template(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Render the payload contract of `pool`. Artifact functions appear in
    /// artifact order; empty fragments are skipped.
    pub fn render(&self, options: &Options, pool: Pool, config: &PoolConfig) -> GenResult<String> {
        let functions: Vec<&str> = config
            .artifacts
            .iter()
            .flat_map(|a| a.functions.iter())
            .map(|f| f.as_str())
            .filter(|f| !f.trim().is_empty())
            .collect();

        let base = base_contract(pool);
        let body = functions.join("\n");
        let view = ProposalView {
            imports: resolve_imports(pool, &base, &body),
            title: comment_text(&options.title),
            author: comment_text(&options.author),
            discussion: comment_text(&options.discussion),
            folder: options.folder_name(),
            contract: options.contract_name(pool),
            network: pool.chain().alias(),
            base_contract: base,
            functions,
        };

        let context = Context::from_serialize(&view).map_err(|e| GenError::Template(e.to_string()))?;
        let mut text = self
            .tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| GenError::Template(e.to_string()))?;
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(text)
    }
}

/// Render with a freshly compiled template.
pub fn render_proposal(options: &Options, pool: Pool, config: &PoolConfig) -> GenResult<String> {
    ProposalRenderer::new()?.render(options, pool, config)
}

/// Import lines for the libraries `body` references, plus the base script.
pub fn resolve_imports(pool: Pool, base: &str, body: &str) -> Vec<String> {
    let mut imports = Vec::new();

    let book: Vec<String> = [
        pool.as_str().to_string(),
        format!("{}Assets", pool),
        format!("{}EModes", pool),
    ]
    .into_iter()
    .filter(|lib| references(body, lib))
    .collect();
    if !book.is_empty() {
        imports.push(format!(
            "import {{{}}} from 'aave-address-book/{}.sol';",
            book.join(", "),
            pool
        ));
    }

    const LIBRARIES: [(&str, &str); 4] = [
        (
            "IAaveV3ConfigEngine",
            "aave-v3-origin/src/contracts/extensions/v3-config-engine/IAaveV3ConfigEngine.sol",
        ),
        (
            "EngineFlags",
            "aave-v3-origin/src/contracts/extensions/v3-config-engine/EngineFlags.sol",
        ),
        ("IRiskSteward", "../../../interfaces/IRiskSteward.sol"),
        ("IPriceCapAdapter", "aave-capo/interfaces/IPriceCapAdapter.sol"),
    ];
    for (name, path) in LIBRARIES {
        if references(body, name) {
            imports.push(format!("import {{{}}} from '{}';", name, path));
        }
    }

    imports.push(format!(
        "import {{{}}} from '../../../../scripts/networks/{}.s.sol';",
        base, base
    ));
    imports
}

/// Whether `ident` occurs in `code` as a whole identifier.
fn references(code: &str, ident: &str) -> bool {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    code.match_indices(ident).any(|(start, _)| {
        let before = code[..start].chars().next_back();
        let after = code[start + ident.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stewgen_core::{CodeArtifact, PoolCache};

    fn options() -> Options {
        Options::new(vec![Pool::AaveV3Ethereum], "test", "test", "test", "20231023").unwrap()
    }

    fn config(functions: &[&str]) -> PoolConfig {
        let mut config = PoolConfig::new(PoolCache { block_number: 42 });
        config.artifacts = functions
            .iter()
            .map(|f| CodeArtifact::function(f.to_string()))
            .collect();
        config
    }

    #[test]
    fn test_render_header_and_name() {
        let text = render_proposal(&options(), Pool::AaveV3Ethereum, &config(&[])).unwrap();
        assert!(text.starts_with("// SPDX-License-Identifier: MIT\npragma solidity ^0.8.0;\n\n"));
        assert!(text.contains(" * @title test\n"));
        assert!(text.contains(
            " * - deploy-command: make run-script contract=src/contracts/updates/20231023_AaveV3Ethereum_Test/AaveV3Ethereum_Test_20231023.sol:AaveV3Ethereum_Test_20231023 network=mainnet broadcast=false generate_diff=true\n"
        ));
        assert!(text.contains("contract AaveV3Ethereum_Test_20231023 is RiskStewardsEthereum {\n"));
        assert!(text.trim_end().ends_with("    return 'AaveV3Ethereum_Test_20231023';\n  }\n}"));
        assert!(text.contains(
            "import {RiskStewardsEthereum} from '../../../../scripts/networks/RiskStewardsEthereum.s.sol';\n\n/**"
        ));
    }

    #[test]
    fn test_render_placeholders_for_missing_metadata() {
        let mut options = options();
        options.discussion = String::new();
        options.author = String::new();
        let text = render_proposal(&options, Pool::AaveV3Ethereum, &config(&[])).unwrap();
        assert!(text.contains(" * @author TODO\n"));
        assert!(text.contains(" * - discussion: TODO\n"));
    }

    #[test]
    fn test_render_keeps_doc_comment_closed() {
        let mut options = options();
        options.author = "BGD */ Labs".to_string();
        options.discussion = "https://x/*/".to_string();
        let text = render_proposal(&options, Pool::AaveV3Ethereum, &config(&[])).unwrap();
        assert!(text.contains(" * @author BGD *\\/ Labs\n"));
        assert!(text.contains(" * - discussion: https://x/*\\/\n"));
        assert_eq!(text.matches("*/").count(), 1);
    }

    #[test]
    fn test_render_functions_in_artifact_order() {
        let text = render_proposal(
            &options(),
            Pool::AaveV3Ethereum,
            &config(&["  function b() {}", "", "  function a() {}"]),
        )
        .unwrap();
        let b = text.find("function b()").unwrap();
        let a = text.find("function a()").unwrap();
        assert!(b < a);
        assert!(text.trim_end().ends_with("  }\n\n  function b() {}\n\n  function a() {}\n}"));
    }

    #[test]
    fn test_base_chain_network_name() {
        let options = Options::new(vec![Pool::AaveV3Base], "test", "test", "test", "20231023").unwrap();
        let text = render_proposal(&options, Pool::AaveV3Base, &config(&[])).unwrap();
        assert!(text.contains("is RiskStewardsBaseChain {"));
        assert!(text.contains("network=base "));
    }

    #[test]
    fn test_resolve_imports_from_references() {
        let body = "oracle: AaveV3EthereumAssets.WETH_ORACLE, x: EngineFlags.KEEP_CURRENT, IRiskSteward.PriceCapStableUpdate";
        let imports = resolve_imports(Pool::AaveV3Ethereum, "RiskStewardsEthereum", body);
        assert_eq!(
            imports,
            vec![
                "import {AaveV3EthereumAssets} from 'aave-address-book/AaveV3Ethereum.sol';".to_string(),
                "import {EngineFlags} from 'aave-v3-origin/src/contracts/extensions/v3-config-engine/EngineFlags.sol';".to_string(),
                "import {IRiskSteward} from '../../../interfaces/IRiskSteward.sol';".to_string(),
                "import {RiskStewardsEthereum} from '../../../../scripts/networks/RiskStewardsEthereum.s.sol';".to_string(),
            ]
        );
    }

    #[test]
    fn test_references_whole_identifiers_only() {
        assert!(references("a AaveV3EthereumEModes.X", "AaveV3EthereumEModes"));
        assert!(!references("AaveV3EthereumLidoAssets.X", "AaveV3EthereumAssets"));
        assert!(!references("AaveV3EthereumAssets.X", "AaveV3Ethereum"));
    }
}
