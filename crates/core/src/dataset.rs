//! Built-in pattern dataset.
//!
//! The 22 records shipped with the guide, in sidebar display order. The code
//! sample strings are display payloads only; nothing in the crate parses or
//! evaluates them.

use crate::catalog::{Category, PatternRecord};

#[rustfmt::skip]
pub(crate) const BUILTIN: &[PatternRecord] = &[
    PatternRecord {
        name: "Abstract Factory",
        category: Category::Creational,
        explanation: "Provides an interface for creating families of related or dependent objects without specifying their concrete classes.",
        brief_code: r#"// Abstract Products
class Button {
  render() { throw new Error("Method 'render()' must be implemented."); }
}

class Checkbox {
  render() { throw new Error("Method 'render()' must be implemented."); }
}

// Concrete Products (Dark Theme)
class DarkButton extends Button {
  render() { console.log("Rendering Dark Button"); }
}
class DarkCheckbox extends Checkbox {
  render() { console.log("Rendering Dark Checkbox"); }
}
// Concrete Products (Light Theme)
class LightButton extends Button {
  render() { console.log("Rendering Light Button"); }
}
class LightCheckbox extends Checkbox {
  render() { console.log("Rendering Light Checkbox"); }
}
// Abstract Factory
class GUIFactory {
  createButton() { throw new Error("Method 'createButton()' must be implemented."); }
  createCheckbox() { throw new Error("Method 'createCheckbox()' must be implemented."); }
}
// Concrete Factories
class DarkGUIFactory extends GUIFactory {
  createButton() { return new DarkButton(); }
  createCheckbox() { return new DarkCheckbox(); }
}
class LightGUIFactory extends GUIFactory {
  createButton() { return new LightButton(); }
  createCheckbox() { return new LightCheckbox(); }
}
// Client Code
function renderUI(factory) {
  const button = factory.createButton();
  const checkbox = factory.createCheckbox();
  button.render();
  checkbox.render();
}
console.log("Dark Theme UI:");
renderUI(new DarkGUIFactory());
console.log("\nLight Theme UI:");
renderUI(new LightGUIFactory());"#,
        simplest_code: r#"class ProductA { constructor(type) { this.type = type; } }
class ProductB { constructor(type) { this.type = type; } }
class ConcreteFactory1 {
  createProductA() { return new ProductA("Type1A"); }
  createProductB() { return new ProductB("Type1B"); }
}
class ConcreteFactory2 {
  createProductA() { return new ProductA("Type2A"); }
  createProductB() { return new ProductB("Type2B"); }
}
const factory1 = new ConcreteFactory1();
console.log(factory1.createProductA()); // ProductA { type: 'Type1A' }
console.log(factory1.createProductB()); // ProductB { type: 'Type1B' }"#,
    },
    PatternRecord {
        name: "Adapter",
        category: Category::Structural,
        explanation: "Allows objects with incompatible interfaces to collaborate. It acts as a wrapper that translates calls from one interface to another.",
        brief_code: r#"// The "Adaptee" - an existing class with an incompatible interface
class OldCalculator {
  add(operand1, operand2) {
    return operand1 + operand2;
  }
}
// The "Target" interface that the client expects
class NewCalculator {
  sum(a, b) {
    throw new Error("Method 'sum()' must be implemented.");
  }
}
// The "Adapter"
class CalculatorAdapter extends NewCalculator {
  constructor(oldCalculator) {
    super();
    this.oldCalculator = oldCalculator;
  }
  sum(a, b) {
    // Translate the new interface call to the old interface call
    return this.oldCalculator.add(a, b);
  }
}
// Client code using the NewCalculator interface
const newCalc = new CalculatorAdapter(new OldCalculator());
console.log(`Using adapter: 5 + 3 = ${newCalc.sum(5, 3)}`);"#,
        simplest_code: r#"class OldService {
  doOldStuff(data) { return `Old: ${data}`; }
}
class NewServiceAdapter {
  constructor(oldService) { this.oldService = oldService; }
  doNewStuff(input) { return this.oldService.doOldStuff(input); }
}
const old = new OldService();
const adapter = new NewServiceAdapter(old);
console.log(adapter.doNewStuff("hello")); // Old: hello"#,
    },
    PatternRecord {
        name: "Builder",
        category: Category::Creational,
        explanation: "Separates the construction of a complex object from its representation, allowing the same construction process to create different representations.",
        brief_code: r#"// Product
class Car {
  constructor() {
    this.parts = {};
  }
  addPart(key, value) {
    this.parts[key] = value;
  }
  show() {
    console.log("Car built:", JSON.stringify(this.parts));
  }
}

// Builder Interface
class CarBuilder {
  buildEngine() { throw new Error("Method 'buildEngine()' must be implemented."); }
  buildWheels() { throw new Error("Method 'buildWheels()' must be implemented."); }
  buildBody() { throw new Error("Method 'buildBody()' must be implemented."); }
  getCar() { throw new Error("Method 'getCar()' must be implemented."); }
}

// Concrete Builder
class SportsCarBuilder extends CarBuilder {
  constructor() {
    super();
    this.car = new Car();
  }
  buildEngine() { this.car.addPart("engine", "V8 Sports Engine"); }
  buildWheels() { this.car.addPart("wheels", "20-inch Alloy Wheels"); }
  buildBody() { this.car.addPart("body", "Aerodynamic Sports Body"); }
  getCar() { return this.car; }
}

// Director
class Director {
  construct(builder) {
    builder.buildEngine();
    builder.buildWheels();
    builder.buildBody();
    return builder.getCar();
  }
}

const director = new Director();
const sportsCarBuilder = new SportsCarBuilder();
const sportsCar = director.construct(sportsCarBuilder);
sportsCar.show();"#,
        simplest_code: r#"class Product { constructor() { this.parts = []; } add(part) { this.parts.push(part); } }

class Builder {
  constructor() { this.product = new Product(); }
  buildPartA() { this.product.add("PartA"); return this; }
  buildPartB() { this.product.add("PartB"); return this; }
  getResult() { return this.product; }
}

const builder = new Builder();
const p = builder.buildPartA().buildPartB().getResult();
console.log(p.parts); // [ 'PartA', 'PartB' ]"#,
    },
    PatternRecord {
        name: "Factory Method",
        category: Category::Creational,
        explanation: "Defines an interface for creating an object, but lets subclasses alter the type of objects that will be created.",
        brief_code: r#"class Dialog {
  createButton() { throw new Error('Override!'); }
  render() {
    const button = this.createButton();
    button.onClick();
  }
}
class WindowsDialog extends Dialog {
  createButton() { return new WindowsButton(); }
}
class WebDialog extends Dialog {
  createButton() { return new WebButton(); }
}
class WindowsButton { onClick() { console.log('Windows Button'); } }
class WebButton { onClick() { console.log('Web Button'); } }
new WindowsDialog().render();
new WebDialog().render();"#,
        simplest_code: r#"class Creator {
  create() { return {}; }
}
console.log(new Creator().create());"#,
    },
    PatternRecord {
        name: "Prototype",
        category: Category::Creational,
        explanation: "Creates new objects by copying an existing object, known as the prototype.",
        brief_code: r#"const carPrototype = { drive() { console.log('Driving'); } };
const car1 = Object.create(carPrototype);
car1.drive();"#,
        simplest_code: r#"const proto = { x: 1 };
const obj = Object.create(proto);
console.log(obj.x);"#,
    },
    PatternRecord {
        name: "Singleton",
        category: Category::Creational,
        explanation: "Ensures a class has only one instance and provides a global point of access to it.",
        brief_code: r#"class Singleton {
  constructor() {
    if (Singleton.instance) return Singleton.instance;
    Singleton.instance = this;
  }
}
const a = new Singleton();
const b = new Singleton();
console.log(a === b); // true"#,
        simplest_code: r#"const singleton = (() => { let instance; return () => instance || (instance = {}); })();
console.log(singleton() === singleton());"#,
    },
    PatternRecord {
        name: "Bridge",
        category: Category::Structural,
        explanation: "Decouples an abstraction from its implementation so that the two can vary independently.",
        brief_code: r#"class Device { enable() {} }
class TV extends Device { enable() { console.log('TV on'); } }
class Remote {
  constructor(device) { this.device = device; }
  turnOn() { this.device.enable(); }
}
const remote = new Remote(new TV());
remote.turnOn();"#,
        simplest_code: r#"const impl = { op: () => 'impl' };
const abs = { run: () => impl.op() };
console.log(abs.run());"#,
    },
    PatternRecord {
        name: "Composite",
        category: Category::Structural,
        explanation: "Composes objects into tree structures to represent part-whole hierarchies.",
        brief_code: r#"class Component { operation() {} }
class Leaf extends Component { operation() { return 'Leaf'; } }
class Composite extends Component {
  constructor() { super(); this.children = []; }
  add(child) { this.children.push(child); }
  operation() { return this.children.map(c => c.operation()).join(', '); }
}
const root = new Composite();
root.add(new Leaf());
console.log(root.operation());"#,
        simplest_code: r#"const leaf = { op: () => 'leaf' };
const comp = { children: [leaf], op: function() { return this.children.map(c => c.op()).join(); } };
console.log(comp.op());"#,
    },
    PatternRecord {
        name: "Decorator",
        category: Category::Structural,
        explanation: "Adds new behavior to objects dynamically by placing them inside special wrapper objects.",
        brief_code: r#"function coffee() { return 'Coffee'; }
function withMilk(fn) { return () => fn() + ' + Milk'; }
const milkCoffee = withMilk(coffee);
console.log(milkCoffee());"#,
        simplest_code: r#"const base = x => x;
const deco = fn => x => fn(x) + '!';
console.log(deco(base)('hi'));"#,
    },
    PatternRecord {
        name: "Facade",
        category: Category::Structural,
        explanation: "Provides a simplified interface to a complex subsystem.",
        brief_code: r#"class Engine { start() { console.log('Engine started'); } }
class Car {
  constructor() { this.engine = new Engine(); }
  start() { this.engine.start(); }
}
new Car().start();"#,
        simplest_code: r#"const sub = () => 'sub';
const facade = () => sub();
console.log(facade());"#,
    },
    PatternRecord {
        name: "Flyweight",
        category: Category::Structural,
        explanation: "Reduces memory usage by sharing as much data as possible with similar objects.",
        brief_code: r#"class Flyweight { constructor(shared) { this.shared = shared; } }
class Factory {
  constructor() { this.pool = {}; }
  get(shared) {
    if (!this.pool[shared]) this.pool[shared] = new Flyweight(shared);
    return this.pool[shared];
  }
}
const factory = new Factory();
const a = factory.get('A');
const b = factory.get('A');
console.log(a === b);"#,
        simplest_code: r#"const pool = {};
const get = k => pool[k] || (pool[k] = { k });
console.log(get('x') === get('x'));"#,
    },
    PatternRecord {
        name: "Proxy",
        category: Category::Structural,
        explanation: "Provides a surrogate or placeholder for another object to control access to it.",
        brief_code: r#"const target = { msg: 'hi' };
const handler = { get: (obj, prop) => prop in obj ? obj[prop] : 'nope' };
const proxy = new Proxy(target, handler);
console.log(proxy.msg);
console.log(proxy.unknown);"#,
        simplest_code: r#"const obj = { x: 1 };
const proxy = new Proxy(obj, {});
console.log(proxy.x);"#,
    },
    PatternRecord {
        name: "Chain of Responsibility",
        category: Category::Behavioral,
        explanation: "Passes a request along a chain of handlers until one of them handles it.",
        brief_code: r#"class Handler {
  setNext(handler) { this.next = handler; return handler; }
  handle(req) { if (this.next) return this.next.handle(req); }
}
class AuthHandler extends Handler {
  handle(req) { if (req.auth) return 'Auth'; return super.handle(req); }
}
class LogHandler extends Handler {
  handle(req) { console.log('Log'); return super.handle(req); }
}
const chain = new AuthHandler();
chain.setNext(new LogHandler());
console.log(chain.handle({ auth: true }));"#,
        simplest_code: r#"const h1 = x => x > 0 ? 'ok' : null;
const h2 = x => x < 0 ? 'neg' : null;
console.log(h1(-1) || h2(-1));"#,
    },
    PatternRecord {
        name: "Command",
        category: Category::Behavioral,
        explanation: "Encapsulates a request as an object, thereby letting you parameterize clients with different requests.",
        brief_code: r#"class Light { on() { console.log('Light on'); } }
class LightOnCommand {
  constructor(light) { this.light = light; }
  execute() { this.light.on(); }
}
const light = new Light();
const cmd = new LightOnCommand(light);
cmd.execute();"#,
        simplest_code: r#"const cmd = () => 'run';
console.log(cmd());"#,
    },
    PatternRecord {
        name: "Iterator",
        category: Category::Behavioral,
        explanation: "Provides a way to access the elements of an aggregate object sequentially without exposing its underlying representation.",
        brief_code: r#"const arr = [1,2,3];
const it = arr[Symbol.iterator]();
console.log(it.next().value);"#,
        simplest_code: r#"for (const x of [1,2]) console.log(x);"#,
    },
    PatternRecord {
        name: "Mediator",
        category: Category::Behavioral,
        explanation: "Defines an object that encapsulates how a set of objects interact.",
        brief_code: r#"class Mediator {
  notify(sender, event) {
    if (event === 'A') console.log('A');
    if (event === 'B') console.log('B');
  }
}
class Component {
  constructor(mediator) { this.mediator = mediator; }
  triggerA() { this.mediator.notify(this, 'A'); }
}
const med = new Mediator();
const comp = new Component(med);
comp.triggerA();"#,
        simplest_code: r#"const med = { notify: e => e };
console.log(med.notify('x'));"#,
    },
    PatternRecord {
        name: "Memento",
        category: Category::Behavioral,
        explanation: "Captures and restores an object's internal state without violating encapsulation.",
        brief_code: r#"class Memento { constructor(state) { this.state = state; } }
class Originator {
  setState(state) { this.state = state; }
  save() { return new Memento(this.state); }
  restore(m) { this.state = m.state; }
}
const origin = new Originator();
origin.setState('A');
const m = origin.save();
origin.setState('B');
origin.restore(m);
console.log(origin.state);"#,
        simplest_code: r#"let state = 'x';
const save = () => state;
const restore = s => state = s;
restore(save());"#,
    },
    PatternRecord {
        name: "Observer",
        category: Category::Behavioral,
        explanation: "Defines a one-to-many dependency so that when one object changes state, all its dependents are notified and updated automatically.",
        brief_code: r#"class Subject {
  constructor() { this.observers = []; }
  subscribe(obs) { this.observers.push(obs); }
  notify(msg) { this.observers.forEach(o => o.update(msg)); }
}
class Observer { update(msg) { console.log('Got', msg); } }
const subj = new Subject();
const obs = new Observer();
subj.subscribe(obs);
subj.notify('Hello');"#,
        simplest_code: r#"const obs = [x => x];
obs.forEach(fn => fn('hi'));"#,
    },
    PatternRecord {
        name: "State",
        category: Category::Behavioral,
        explanation: "Allows an object to alter its behavior when its internal state changes.",
        brief_code: r#"class State { handle() {} }
class OnState extends State { handle() { console.log('On'); } }
class OffState extends State { handle() { console.log('Off'); } }
class Context {
  setState(state) { this.state = state; }
  request() { this.state.handle(); }
}
const ctx = new Context();
ctx.setState(new OnState());
ctx.request();"#,
        simplest_code: r#"let state = () => 'on';
console.log(state());"#,
    },
    PatternRecord {
        name: "Strategy",
        category: Category::Behavioral,
        explanation: "Enables selecting an algorithm's behavior at runtime.",
        brief_code: r#"class StrategyA { execute() { return 'A'; } }
class StrategyB { execute() { return 'B'; } }
class Context {
  setStrategy(strat) { this.strat = strat; }
  run() { return this.strat.execute(); }
}
const ctx = new Context();
ctx.setStrategy(new StrategyA());
console.log(ctx.run());"#,
        simplest_code: r#"const strat = x => x + 1;
console.log(strat(2));"#,
    },
    PatternRecord {
        name: "Template Method",
        category: Category::Behavioral,
        explanation: "Defines the skeleton of an algorithm in the superclass but lets subclasses override specific steps of the algorithm without changing its structure.",
        brief_code: r#"class Game {
  play() { this.start(); this.end(); }
  start() { throw 'Override!'; }
  end() { throw 'Override!'; }
}
class Chess extends Game {
  start() { console.log('Chess starts'); }
  end() { console.log('Chess ends'); }
}
new Chess().play();"#,
        simplest_code: r#"const base = { run: () => 'x' };
console.log(base.run());"#,
    },
    PatternRecord {
        name: "Visitor",
        category: Category::Behavioral,
        explanation: "Lets you define new operations on objects without changing the objects themselves.",
        brief_code: r#"class Visitor { visit(element) { element.accept(this); } }
class Element { accept(visitor) { visitor.visit(this); } }
const v = new Visitor();
const e = new Element();
v.visit(e);"#,
        simplest_code: r#"const visit = x => x;
console.log(visit('hi'));"#,
    },
];
