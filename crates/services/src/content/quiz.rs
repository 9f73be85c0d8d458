//! The shipped blockchain knowledge quiz.

use chainlab_core::model::{AidGrantDef, ItemDef, KeyDef, PackDef};

fn question(
    id: u64,
    category: &str,
    prompt: &str,
    options: [&str; 4],
    correct: usize,
    explanation: &str,
) -> ItemDef {
    ItemDef {
        id,
        category: Some(category.to_string()),
        title: None,
        prompt: prompt.to_string(),
        key: KeyDef::Choice {
            options: options.iter().map(|o| (*o).to_string()).collect(),
            correct,
        },
        hints: Vec::new(),
        explanation: Some(explanation.to_string()),
    }
}

/// Eight questions across chain setup, the console, FISCO BCOS, and
/// WeBase. Ten points per correct answer, two eliminates and one skip.
#[must_use]
pub fn pack_def() -> PackDef {
    PackDef {
        title: "Blockchain Knowledge Quiz".to_string(),
        reward: 10,
        aids: vec![
            AidGrantDef {
                kind: "eliminate-wrong-option".to_string(),
                count: 2,
            },
            AidGrantDef {
                kind: "skip-item".to_string(),
                count: 1,
            },
        ],
        items: vec![
            question(
                1,
                "Chain Setup",
                "Which of the following is not a basic component of a blockchain network?",
                [
                    "Nodes",
                    "A consensus mechanism",
                    "A central server",
                    "A distributed ledger",
                ],
                2,
                "Decentralization is the defining property of a blockchain: there is no \
                 central server, and the network is maintained jointly by many nodes.",
            ),
            question(
                2,
                "Console",
                "Which command is typically used to query block information in a blockchain console?",
                ["getBlock", "findBlock", "searchBlock", "queryBlock"],
                0,
                "getBlock is the standard command for querying block information in most \
                 blockchain consoles.",
            ),
            question(
                3,
                "FISCO BCOS",
                "What kind of blockchain platform is FISCO BCOS?",
                [
                    "A public chain",
                    "A consortium chain",
                    "A private chain",
                    "A hybrid chain",
                ],
                1,
                "FISCO BCOS is an open source, enterprise-grade consortium chain platform \
                 built for enterprise scenarios.",
            ),
            question(
                4,
                "WeBase",
                "What does WeBase mainly provide?",
                [
                    "Cryptocurrency mining",
                    "Blockchain middleware services",
                    "A decentralized exchange",
                    "Digital wallet management",
                ],
                1,
                "WeBase is a blockchain middleware platform offering visual management, \
                 contract development tools, and more.",
            ),
            question(
                5,
                "Chain Setup",
                "Which of the following is not a common blockchain consensus mechanism?",
                [
                    "PoW (Proof of Work)",
                    "PoS (Proof of Stake)",
                    "PBFT (Practical Byzantine Fault Tolerance)",
                    "HTTP (Hypertext Transfer Protocol)",
                ],
                3,
                "HTTP is a network transfer protocol, not a blockchain consensus mechanism.",
            ),
            question(
                6,
                "Console",
                "After a transaction is sent, where does it wait to be confirmed?",
                [
                    "The transaction pool",
                    "The blockchain",
                    "A smart contract",
                    "The consensus module",
                ],
                0,
                "New transactions first enter the transaction pool, where they wait for \
                 miners or validator nodes to package them into a block.",
            ),
            question(
                7,
                "FISCO BCOS",
                "Which smart contract language does FISCO BCOS support?",
                ["Java", "Python", "Solidity", "All of the above"],
                3,
                "FISCO BCOS supports writing smart contracts in Solidity, Java, Python, \
                 and more.",
            ),
            question(
                8,
                "WeBase",
                "What is the main purpose of the WeBase contract IDE?",
                [
                    "Blockchain node deployment",
                    "Writing and debugging smart contracts",
                    "Digital asset trading",
                    "User identity verification",
                ],
                1,
                "The WeBase contract IDE is used to write, compile, deploy, and debug \
                 smart contracts.",
            ),
        ],
    }
}
