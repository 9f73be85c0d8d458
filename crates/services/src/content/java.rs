//! The shipped Java code-challenge levels.

use chainlab_core::model::{AidGrantDef, ItemDef, KeyDef, PackDef};

fn level(
    id: u64,
    title: &str,
    prompt: &str,
    hints: [&str; 3],
    markers: &[&str],
    solution: &str,
) -> ItemDef {
    ItemDef {
        id,
        category: None,
        title: Some(title.to_string()),
        prompt: prompt.to_string(),
        key: KeyDef::Pattern {
            markers: markers.iter().map(|m| (*m).to_string()).collect(),
            solution: solution.to_string(),
        },
        hints: hints.iter().map(|h| (*h).to_string()).collect(),
        explanation: None,
    }
}

/// Thirteen levels from Hello World up to classes and objects. Each level
/// carries three hints and a reference solution that satisfies its own
/// acceptance rule.
#[must_use]
pub fn pack_def() -> PackDef {
    PackDef {
        title: "Java Coding Challenge".to_string(),
        reward: 10,
        aids: vec![AidGrantDef {
            kind: "skip-item".to_string(),
            count: 3,
        }],
        items: vec![
            level(
                1,
                "Hello World",
                "Print your first line of Java: \"Hello Java World!\"",
                [
                    "Use the System.out.println() function",
                    "Remember the quotes around the string",
                    "Java statements end with a semicolon",
                ],
                &["println", "Hello Java World!"],
                "System.out.println(\"Hello Java World!\");",
            ),
            level(
                2,
                "Variable Magic",
                "Create an integer variable named num, assign it 42, then print it",
                [
                    "Declare integer variables with the int keyword",
                    "Use = to assign a value",
                    "Pass the variable name to println",
                ],
                &["int num", "42", "println"],
                "int num = 42;\nSystem.out.println(num);",
            ),
            level(
                3,
                "Conditionals",
                "Write an if statement that prints \"Big number\" when a number is greater than 10",
                [
                    "An if statement looks like: if (condition) { ... }",
                    "Compare with the > operator",
                    "Put the println call inside the braces",
                ],
                &["if", "Big number"],
                "int number = 15;\nif (number > 10) {\n    System.out.println(\"Big number\");\n}",
            ),
            level(
                4,
                "For Loop Basics",
                "Use a for loop to print the numbers 1 to 5",
                [
                    "A for loop looks like: for (init; condition; update) { ... }",
                    "Print the loop variable with System.out.println()",
                    "Start the loop variable at 1 and stop at 5",
                ],
                &["for", "<= 5", "println"],
                "for (int i = 1; i <= 5; i++) {\n    System.out.println(i);\n}",
            ),
            level(
                5,
                "While Loop Challenge",
                "Use a while loop to print the numbers 1 to 5",
                [
                    "A while loop looks like: while (condition) { ... }",
                    "Initialize the variable before the loop",
                    "Update the variable inside the loop body",
                ],
                &["while", "<= 5", "println"],
                "int i = 1;\nwhile (i <= 5) {\n    System.out.println(i);\n    i++;\n}",
            ),
            level(
                6,
                "Array Basics",
                "Create an integer array and print its first and last elements",
                [
                    "Array declaration: int[] name = {e1, e2, ...};",
                    "Array indices start at 0",
                    "Access elements with name[index]",
                ],
                &["int[]", "[0]", "[4]"],
                "int[] numbers = {10, 20, 30, 40, 50};\nSystem.out.println(numbers[0]);\nSystem.out.println(numbers[4]);",
            ),
            level(
                7,
                "Array Traversal",
                "Use a for loop to walk an array and print every element",
                [
                    "Get the array length with name.length",
                    "The loop variable doubles as the array index",
                    "Run from 0 up to length - 1",
                ],
                &["for", ".length", "println"],
                "int[] numbers = {10, 20, 30, 40, 50};\nfor (int i = 0; i < numbers.length; i++) {\n    System.out.println(numbers[i]);\n}",
            ),
            level(
                8,
                "Defining Methods",
                "Define a method with no parameters and call it",
                [
                    "A method definition looks like: void name() { ... }",
                    "Put the code to run inside the method body",
                    "Call the method with name()",
                ],
                &["void", "()", "println"],
                "void printHello() {\n    System.out.println(\"Hello from method!\");\n}\n\nprintHello();",
            ),
            level(
                9,
                "Methods with Parameters",
                "Define a method that takes parameters and returns a value",
                [
                    "A method definition looks like: returnType name(paramType param) { ... }",
                    "Return the result with a return statement",
                    "Call the method with arguments and print the result",
                ],
                &["int", "return", "println"],
                "int addNumbers(int a, int b) {\n    return a + b;\n}\n\nint result = addNumbers(5, 3);\nSystem.out.println(result);",
            ),
            level(
                10,
                "String Concatenation",
                "Create two strings, join them, and print the result",
                [
                    "Declare string variables with the String keyword",
                    "Join strings with the + operator",
                    "Use double quotes for string literals",
                ],
                &["String", "+", "println"],
                "String firstName = \"Java\";\nString lastName = \"Fun\";\nString fullName = firstName + \" \" + lastName;\nSystem.out.println(fullName);",
            ),
            level(
                11,
                "String Methods",
                "Use the string methods length() and toUpperCase()",
                [
                    "Call string methods with a dot: variable.method()",
                    "length() returns the string length",
                    "toUpperCase() converts the string to upper case",
                ],
                &["length()", "toUpperCase()"],
                "String text = \"Java Programming\";\nSystem.out.println(text.length());\nSystem.out.println(text.toUpperCase());",
            ),
            level(
                12,
                "Classes and Objects",
                "Create a simple class and an object of it",
                [
                    "A class definition looks like: class Name { ... }",
                    "Create objects with the new keyword",
                    "Objects can call the methods of their class",
                ],
                &["class", "new"],
                "class Person {\n    void sayHello() {\n        System.out.println(\"Hello from Person class!\");\n    }\n}\n\nPerson person = new Person();\nperson.sayHello();",
            ),
            level(
                13,
                "Fields and Methods",
                "Create a class with a field and a method",
                [
                    "Declare fields (member variables) inside the class",
                    "Write a constructor to initialize the field",
                    "Access fields and methods through the object",
                ],
                &["class", "String", "new"],
                "class Car {\n    String brand;\n\n    Car(String b) {\n        brand = b;\n    }\n\n    void displayInfo() {\n        System.out.println(\"Car brand: \" + brand);\n    }\n}\n\nCar myCar = new Car(\"JavaCar\");\nmyCar.displayInfo();",
            ),
        ],
    }
}
