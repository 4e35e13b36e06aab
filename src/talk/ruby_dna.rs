// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! "Ruby Dependencies, Notifications, and Adjustments" (Mike Subelsky).
//!
//! Bodies are kept exactly as written for the talk, including the indentation of slides inside
//! sections; the renderer dedents them.

use crate::build::{BuildError, DeckBuilder};
use crate::model::Deck;

pub const TITLE: &str = "Ruby Dependencies, Notifications, and Adjustments";

pub fn ruby_dna() -> Result<Deck, BuildError> {
    let mut deck = DeckBuilder::new().with_title(TITLE);

    deck.slide(
        "\x1b[1mRuby Dependencies, Notifications, and Adjustments\x1b[0m


Mike Subelsky
@subelsky


(slides by https://github.com/fxn/tkn)\n",
        ":center",
    )?;
    deck.slide("How do you connect your objects?\n", ":center")?;
    deck.slide(
        "# constructor arguments

class DecryptedString
  def initialize(secret_str)
    @secret_str = secret_str
  end
end\n",
        ":code",
    )?;
    deck.slide(
        "# setters

agent = Mechanize.new
agent.log = Logger.new(STDOUT)\n",
        ":code",
    )?;
    deck.slide(
        "# direct instantiation

class SportsCar < Car
  def initialize
    @engine = Engine.new(:v6)
  end
end\n",
        ":code",
    )?;
    deck.slide(
        "# callbacks

request = Typhoeus::Request.new(url,options)
request.on_complete do |response|
  if response.success?
    xm = Nokogiri::XML(response.body)
  end
end\n",
        ":code",
    )?;
    deck.slide(
        r##"# reference a global constant

class DataFetcher
  def fetch(params)
    Rails.logger.info "Fetching #{params}"
  end
end
"##,
        ":code",
    )?;
    deck.slide("Growing Object-Oriented Software, Guided by Tests\n", ":center")?;
    deck.slide(
        "Object Peer Stereotypes

  * Dependencies
  * Notifications
  * Adjustments\n",
        ":block",
    )?;

    deck.section("Dependencies", |s| {
        s.slide(
            "  “Services that the object requires from its
  peers so it can perform its responsibilities.
  The object cannot function without these
  services. It should not be possible to create
  the object without them.”\n",
            ":block",
        )?;
        s.slide(
            "  class HttpRequest
    attr_reader :typhoeus_request

    def initialize(url,options = {})
      @typhoeus_request = Typhoeus::Request.new(url,options)
      @success_callbacks = []
      @failure_callbacks = []
    end
  end\n",
            ":code",
        )?;
        s.slide(
            "  Rules of thumb:

  * Always pass dependencies into the constructor
  * No reasonable defaults for dependencies\n",
            ":block",
        )?;
        Ok(())
    })?;

    deck.section("Notifications", |s| {
        s.slide(
            "  “Peers that need to be kept up to date with the
  object’s activity. The object will notify
  interested peers whenever it changes state or
  performs a significant action...the object
  neither knows nor cares which peers are
  listening.”\n",
            ":block",
        )?;
        s.slide(
            r##"def initialize(url,opt = {})
  @typhoeus_request = Typhoeus::Request.new(url,opt)
  @success_callbacks = []
  @failure_callbacks = []

  @typhoeus_request.on_complete do |response|
    if response.success?
      success_callbacks.each do |sc|
        sc.call(response)
      end
    elsif response.timed_out?
      failure_callbacks.each do |fc|
        fc.call("Request timed out for #{url}")
      end
    end
  end
end
"##,
            ":code",
        )?;
        s.slide(
            "def on_success(&block)
  success_callbacks << block
end

def on_failure(&block)
  failure_callbacks << block
end

private

attr_reader :success_callbacks, :failure_callbacks\n",
            ":code",
        )?;
        s.slide(
            r##"stats_request.on_success do |body|
  xml = Nokogiri::XML(body)

  xml.xpath("//Audience").each do |aud|
    key = aud.at("id").text
    # do stuff with key
  end

  @success = true
end
"##,
            ":code",
        )?;
        s.slide(
            r##"  # blocks are good for error notifications

  data_fetcher.fetch do |err_msg|
    puts "We couldn't complete our task because of #{err_msg}"
    return
  end

  # good way to avoid returning nil!
"##,
            ":code",
        )?;
        s.slide(
            "  # log files are often notifications
  agent = Mechanize.new
  agent.log = Logger.new(STDOUT)\n",
            ":code",
        )?;
        Ok(())
    })?;

    deck.section("Adjustments", |s| {
        s.slide(
            "  “Peers that adjust the object’s behavior to the
  wider needs of the system. This includes policy
  objects that make decisions on the object’s behalf
  ...and component parts of the object if it’s a
  composite.”\n",
            ":block",
        )?;
        s.slide(
            r##"class DataFetcher
  attr_writer :auth_agent, :shaz_fetcher

  def fetch(credentials)
    auth_agent.login(credentials) do |msg|
      logger.warn "Could not login due to #{msg}"
      return
    end

    shaz_fetcher.fetch(auth_agent.token) do |msg|
      logger.warn "Could not fetch shaz due to #{msg}"
    end
  end
"##,
            ":code",
        )?;
        s.slide(
            "  private

  def auth_agent
    @auth_agent ||= AuthorizationAgent.new
  end

  def shaz_fetcher
    @shaz_fetcher ||= ShazFetcher.new
  end
end\n",
            ":code",
        )?;
        s.slide(
            r##"  # strategy pattern is usually an adjudment

  class DataFetcher
    attr_writer :admin_checker

    def fetch(query_params)
      if !admin_checker.valid?(query_params)
        yield "You are not authorized"
        return
      end

      # proceed to fetch data
    end

    private

    def admin_checker
      @admin_checker ||= AdminChecker.new
    end
  end
"##,
            ":code",
        )?;
        Ok(())
    })?;

    deck.slide(
        "class HttpRequestService
  attr_writer :hydra

  def request(url,options = {})
    HttpRequest.new(url,options).tap do |http_request|
      hydra.queue(http_request.typhoeus_request)
    end
  end

  def run
    hydra.run
  end

  private

  def hydra
    @hydra ||= Typhoeus::Hydra.new
  end
end\n",
        ":code",
    )?;
    deck.slide(
        "Dependency injection containers can help

  * http://bit.ly/eQXyNq # Jim Weirich's article
  * http://rubygems.org/gems/dim # my gem\n",
        ":block",
    )?;
    deck.slide(
        r##"AppContainer = Dim::Container.new

# snip

AppContainer.register(:logger) do |c|
  if c.test?
    Logger.new("#{c.root}/log/#{c.env}.log")
  elsif c.production?
    Sidekiq.logger.tap { |l| l.level = ENV["DEBUG"].present? ? Logger::DEBUG : Logger::INFO }
  else
    Logger.new(STDOUT)
  end
end
"##,
        ":code",
    )?;
    deck.slide(
        r##"AppContainer.register(:mechanize) do |c|
  Mechanize.new do |agent|
    agent.log = c.logger
    agent.user_agent_alias = "Mac Safari"
    agent.keep_alive = false
  end
end

AppContainer.register(:salesforce_client) do |c|
  require "databasedotcom"
  Databasedotcom::Client.new({
    client_id: c.salesforce_consumer_key,
    client_secret: c.salesforce_consumer_secret
  })
end
"##,
        ":code",
    )?;

    deck.section("Conclusion", |s| {
        s.slide(
            r##"  “What matters most is the context in which the
  collaborating objects are used."
"##,
            ":block",
        )?;
        s.slide(
            "  Questions?

  mike@subelsky.com\n",
            ":center",
        )?;
        s.slide("  PS I'm starting a company (adstaq.com). Join us!\n", ":center")?;
        Ok(())
    })?;

    Ok(deck.finish())
}
